//! Air conditioner protocol (Gorenje/MDV-style): pulse-distance, 48 bits
//! (addr/cmd-low/cmd-high each xor-checked), optionally transmitted twice
//! back to back.
//!
//! A single frame is `leading_pulse, leading_gap, (pulse, gap) * 48` plus one
//! shared trailing mark to keep the overall train odd-length. Doubling
//! repeats the gap-terminated 98-pulse body (itself already even-length, so
//! no splice is needed between the two halves) and appends that same single
//! trailing mark once, at the very end: `2*(2+2*48)+1` pulses.

use crate::command::Command;
use crate::error::Error;
use crate::modulation::distance::{self, DistanceTimings};

const TIMINGS: DistanceTimings = DistanceTimings {
    leading_pulse: 4500,
    leading_gap: 4500,
    pulse: 560,
    gap_0: 560,
    gap_1: 1690,
};

/// Length of one frame's body before the shared trailing mark: leading
/// pulse/gap plus 48 `(pulse, gap)` pairs.
const CORE_LEN: usize = 2 + 2 * 48;

fn decode_half(pulses: &[u32]) -> Result<(u8, u16), Error> {
    let data = distance::decode(pulses, TIMINGS, 48, false)?;
    if data[0] != data[1] ^ 0xFF || data[2] != data[3] ^ 0xFF || data[4] != data[5] ^ 0xFF {
        return Err(Error::data("invalid AC xored data"));
    }
    let addr = data[0];
    let cmd = data[2] as u16 | ((data[4] as u16) << 8);
    Ok((addr, cmd))
}

pub fn decode(pulses: &[u32]) -> Result<Command, Error> {
    if pulses.len() < CORE_LEN + 1 {
        return Err(Error::data("invalid AC data: too short"));
    }
    let (addr, cmd) = decode_half(pulses)?;
    let double = pulses.len() >= 2 * CORE_LEN + 1
        && decode_half(&pulses[CORE_LEN..]).ok() == Some((addr, cmd));
    Ok(Command::Ac { addr, cmd, double })
}

pub fn encode(addr: u8, cmd: u16, double: bool) -> Result<Vec<u32>, Error> {
    let data = [
        addr,
        addr ^ 0xFF,
        (cmd & 0xFF) as u8,
        ((cmd & 0xFF) ^ 0xFF) as u8,
        (cmd >> 8) as u8,
        ((cmd >> 8) ^ 0xFF) as u8,
    ];
    let frame = distance::encode(&data, TIMINGS, Some(48), false)?;
    debug_assert_eq!(frame.len(), CORE_LEN + 1);
    let core = &frame[..CORE_LEN];
    let mut pulses = core.to_vec();
    if double {
        pulses.extend_from_slice(core);
    }
    pulses.push(TIMINGS.pulse);
    Ok(pulses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_transmission_roundtrips() {
        let pulses = encode(0x20, 0x1234, false).unwrap();
        assert_eq!(pulses.len(), CORE_LEN + 1);
        assert_eq!(decode(&pulses).unwrap(), Command::Ac { addr: 0x20, cmd: 0x1234, double: false });
    }

    #[test]
    fn doubled_transmission_is_detected() {
        // a doubled AC frame is 2*(2+2*48)+1 = 197 pulses.
        let pulses = encode(0xA1, 0x1234, true).unwrap();
        assert_eq!(pulses.len(), 2 * CORE_LEN + 1);
        assert_eq!(pulses.len(), 197);
        assert_eq!(decode(&pulses).unwrap(), Command::Ac { addr: 0xA1, cmd: 0x1234, double: true });
    }

    #[test]
    fn short_train_is_rejected() {
        let err = decode(&[4500, 4500]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn mismatched_second_half_is_not_flagged_double() {
        let mut pulses = encode(0x20, 0x1234, true).unwrap();
        // Corrupt the address byte's first gap in the second transmission.
        let idx = CORE_LEN + 3;
        pulses[idx] = if pulses[idx] == 560 { 1690 } else { 560 };
        assert_eq!(decode(&pulses).unwrap(), Command::Ac { addr: 0x20, cmd: 0x1234, double: false });
    }
}
