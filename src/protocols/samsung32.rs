//! Samsung 32-bit protocol: pulse-distance, address repeated verbatim
//! instead of inverted, command still carries the usual xor check.

use crate::command::Command;
use crate::error::Error;
use crate::modulation::distance::{self, DistanceTimings};

const TIMINGS: DistanceTimings = DistanceTimings {
    leading_pulse: 4500,
    leading_gap: 4500,
    pulse: 550,
    gap_0: 550,
    gap_1: 1650,
};

pub fn decode(pulses: &[u32]) -> Result<Command, Error> {
    let data = distance::decode(pulses, TIMINGS, 32, false)?;
    if data[0] != data[1] {
        return Err(Error::data("invalid address"));
    }
    if data[2] != (data[3] ^ 0xFF) {
        return Err(Error::data("invalid data"));
    }
    Ok(Command::Samsung32 { addr: data[0], cmd: data[2] })
}

pub fn encode(addr: u8, cmd: u8) -> Result<Vec<u32>, Error> {
    let data = [addr, addr, cmd, cmd ^ 0xFF];
    distance::encode(&data, TIMINGS, None, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips() {
        let pulses = encode(0x07, 0x02).unwrap();
        assert_eq!(decode(&pulses).unwrap(), Command::Samsung32 { addr: 0x07, cmd: 0x02 });
    }

    #[test]
    fn rejects_mismatched_address_repeat() {
        let mut pulses = encode(0x07, 0x02).unwrap();
        // Byte 1 (the repeated address) bit 0's gap: flip 1 -> 0 so it no
        // longer equals byte 0.
        let idx = 3 + 2 * 8;
        assert_eq!(pulses[idx], 1650);
        pulses[idx] = 550;
        let err = decode(&pulses).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
