//! Philips RC6 mode 0: Manchester coding with inverted phase and a
//! double-width toggle bit, MSB-first, 21 logical bits (start/mode fields
//! are validated but not surfaced).

use crate::command::Command;
use crate::error::Error;
use crate::modulation::manchester::{self, ManchesterParams};
use crate::toggle;

const T: u32 = 444;
const START: &[bool] = &[true, true, true, true, true, true, false, false];
const DOUBLE_BITS: &[usize] = &[4];

fn params() -> ManchesterParams<'static> {
    ManchesterParams { t: T, start_sequence: START, phase: true, double_bits: DOUBLE_BITS, msb_first: true }
}

pub fn decode(pulses: &[u32]) -> Result<Command, Error> {
    let data = manchester::decode(pulses, &params(), 21)?;
    if data[0] >> 7 != 1 {
        return Err(Error::data("invalid RC6 start bit"));
    }
    let mode = (data[0] >> 4) & 0b111;
    if mode != 0 {
        return Err(Error::data(format!("unsupported RC6 mode {mode}")));
    }
    let addr = ((data[0] & 0b111) << 5) | (data[1] >> 3);
    let cmd = ((data[1] & 0b111) << 5) | (data[2] >> 3);
    Ok(Command::Rc6 { addr, cmd, toggle: None })
}

pub fn encode(addr: u8, cmd: u8, toggle: Option<bool>) -> Result<Vec<u32>, Error> {
    let toggle = toggle.unwrap_or_else(toggle::next) as u8;
    let mode: u8 = 0;
    let values = [
        (1 << 7) | ((mode & 0b111) << 4) | (toggle << 3) | (addr >> 5),
        ((addr & 0x1F) << 3) | (cmd >> 5),
        (cmd & 0x1F) << 3,
    ];
    manchester::encode(&values, &params(), Some(21))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_with_explicit_toggle() {
        let pulses = encode(0x42, 0x7B, Some(true)).unwrap();
        assert_eq!(decode(&pulses).unwrap(), Command::Rc6 { addr: 0x42, cmd: 0x7B, toggle: None });
    }

    #[test]
    fn roundtrips_across_full_address_and_command_range() {
        let pulses = encode(0xFF, 0xFF, Some(false)).unwrap();
        assert_eq!(decode(&pulses).unwrap(), Command::Rc6 { addr: 0xFF, cmd: 0xFF, toggle: None });
    }

    #[test]
    fn rejects_non_mode_zero_data() {
        // Build a frame with mode = 1 directly (encode() always forces
        // mode 0, so this bypasses it to exercise the mode check).
        let values = [(1 << 7) | (1 << 4), 0x00, 0x00];
        let pulses = manchester::encode(&values, &params(), Some(21)).unwrap();
        let err = decode(&pulses).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
