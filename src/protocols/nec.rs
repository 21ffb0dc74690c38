//! NEC, NEC extended, and the 42-bit NEC42 / NEC42-extended variants.
//!
//! All four share one pulse-distance framing; they differ
//! only in field width and whether the high half of each field is an
//! inverse check or an independent payload.

use crate::command::Command;
use crate::error::Error;
use crate::modulation::distance::{self, DistanceTimings};

const TIMINGS: DistanceTimings = DistanceTimings {
    leading_pulse: 9000,
    leading_gap: 4500,
    pulse: 560,
    gap_0: 560,
    gap_1: 1690,
};

pub fn decode(pulses: &[u32]) -> Result<Command, Error> {
    let data = distance::decode(pulses, TIMINGS, 32, false)?;
    if data[0] != data[1] ^ 0xFF || data[2] != data[3] ^ 0xFF {
        return Err(Error::data("invalid NEC xored data"));
    }
    Ok(Command::Nec { addr: data[0], cmd: data[2] })
}

pub fn encode(addr: u8, cmd: u8) -> Result<Vec<u32>, Error> {
    let data = [addr, addr ^ 0xFF, cmd, cmd ^ 0xFF];
    distance::encode(&data, TIMINGS, None, false)
}

pub fn decode_ext(pulses: &[u32]) -> Result<Command, Error> {
    let data = distance::decode(pulses, TIMINGS, 32, false)?;
    let addr = data[0] as u16 | ((data[1] as u16) << 8);
    let cmd = data[2] as u16 | ((data[3] as u16) << 8);
    Ok(Command::NecExt { addr, cmd })
}

pub fn encode_ext(addr: u16, cmd: u16) -> Result<Vec<u32>, Error> {
    let data = [
        (addr & 0xFF) as u8,
        (addr >> 8) as u8,
        (cmd & 0xFF) as u8,
        (cmd >> 8) as u8,
    ];
    distance::encode(&data, TIMINGS, None, false)
}

/// Little-endian reassembly of the 42-bit payload shared by NEC42 and
/// NEC42-ext: address (13), address-inverse (13), command low 6 bits,
/// command high 2 bits, command-inverse (8).
fn unpack42(data: &[u8]) -> (u64, u64, u64, u64) {
    let mut full_bits: u64 = 0;
    for (i, &byte) in data.iter().enumerate().take(6) {
        full_bits |= (byte as u64) << (8 * i);
    }
    let address = full_bits & 0x1FFF;
    let address_inverse = (full_bits >> 13) & 0x1FFF;
    let command_low6 = (full_bits >> 26) & 0x3F;
    let data2 = full_bits >> 32;
    let command_high2 = data2 & 0x3;
    let command = command_low6 | (command_high2 << 6);
    let command_inverse = (data2 >> 2) & 0xFF;
    (address, address_inverse, command, command_inverse)
}

fn pack42(address: u64, address_inverse: u64, command: u64, command_inverse: u64) -> [u8; 6] {
    let full_bits = address
        | (address_inverse << 13)
        | ((command & 0x3F) << 26)
        | (((command >> 6) & 0x3) << 32)
        | (command_inverse << 34);
    let mut values = [0u8; 6];
    for (i, v) in values.iter_mut().enumerate() {
        *v = ((full_bits >> (8 * i)) & 0xFF) as u8;
    }
    values
}

pub fn decode42(pulses: &[u32]) -> Result<Command, Error> {
    let data = distance::decode(pulses, TIMINGS, 42, false)?;
    let (address, address_inverse, command, command_inverse) = unpack42(&data);
    if address != (!address_inverse & 0x1FFF) || command != (!command_inverse & 0xFF) {
        return Err(Error::data("invalid NEC42 xored data"));
    }
    Ok(Command::Nec42 { addr: address as u16, cmd: command as u8 })
}

pub fn encode42(addr: u16, cmd: u8) -> Result<Vec<u32>, Error> {
    if addr > 0x1FFF {
        return Err(Error::data("address must be in 0x0000-0x1FFF"));
    }
    let address = addr as u64 & 0x1FFF;
    let address_inv = !address & 0x1FFF;
    let command = cmd as u64 & 0xFF;
    let command_inv = !command & 0xFF;
    let values = pack42(address, address_inv, command, command_inv);
    distance::encode(&values, TIMINGS, Some(42), false)
}

pub fn decode42_ext(pulses: &[u32]) -> Result<Command, Error> {
    let data = distance::decode(pulses, TIMINGS, 42, false)?;
    let (address, address_inverse, command, command_inverse) = unpack42(&data);
    let full_address = (address | (address_inverse << 13)) as u32;
    let full_command = (command | (command_inverse << 8)) as u16;
    Ok(Command::Nec42Ext { addr: full_address, cmd: full_command })
}

pub fn encode42_ext(addr: u32, cmd: u16) -> Result<Vec<u32>, Error> {
    if addr > 0x3FF_FFFF {
        return Err(Error::data("address must be in 0x000000-0x3FFFFFF"));
    }
    let address = addr as u64 & 0x1FFF;
    let address_inv = (addr as u64 >> 13) & 0x1FFF;
    let command = cmd as u64 & 0xFF;
    let command_inv = (cmd as u64 >> 8) & 0xFF;
    let values = pack42(address, address_inv, command, command_inv);
    distance::encode(&values, TIMINGS, Some(42), false)
}
