//! Pulse-distance modulation: fixed-width mark, bit value carried in the
//! following space width. Used by NEC and its variants, Samsung32,
//! Kaseikyo, RCA, Pioneer, and the AC protocol.

use crate::bits::{bits_of_bytes, pack_bits};
use crate::error::Error;
use crate::tolerance::in_range;

/// Timing parameters for one pulse-distance framing.
#[derive(Debug, Clone, Copy)]
pub struct DistanceTimings {
    pub leading_pulse: u32,
    pub leading_gap: u32,
    pub pulse: u32,
    pub gap_0: u32,
    pub gap_1: u32,
}

/// Decode `pulses` into a byte sequence carrying exactly `bit_length` bits.
pub fn decode(
    pulses: &[u32],
    t: DistanceTimings,
    bit_length: usize,
    msb_first: bool,
) -> Result<Vec<u8>, Error> {
    if pulses.len() < 2 || !in_range(pulses[0], t.leading_pulse) {
        return Err(Error::data(format!(
            "invalid leading pulse length: {}",
            pulses.first().copied().unwrap_or(0)
        )));
    }
    if !in_range(pulses[1], t.leading_gap) {
        return Err(Error::data(format!("invalid leading gap length: {}", pulses[1])));
    }
    let required = 3 + bit_length * 2;
    if pulses.len() < required {
        return Err(Error::data(format!(
            "invalid data length: {} (must be at least {required})",
            pulses.len()
        )));
    }

    let long_is_one = t.gap_1 > t.gap_0;
    let short_is_one = !long_is_one;
    let threshold = (t.gap_0 as u64 + t.gap_1 as u64) / 2;

    let mut bits = Vec::with_capacity(bit_length);
    for i in 0..bit_length {
        let p = 3 + i * 2;
        let mark = pulses[p - 1];
        if !in_range(mark, t.pulse) {
            return Err(Error::data(format!("invalid pulse length: {mark}")));
        }
        let gap = pulses[p];
        if !in_range(gap, t.gap_0) && !in_range(gap, t.gap_1) {
            return Err(Error::data(format!("invalid gap length: {gap}")));
        }
        let bit = if gap as u64 > threshold { long_is_one } else { short_is_one };
        bits.push(bit);
    }

    Ok(pack_bits(bits.into_iter(), bit_length, msb_first))
}

/// Encode `values` (optionally truncated to `bit_length` bits) into a pulse
/// train: `[leading_pulse, leading_gap, pulse, gap, pulse, gap, ..., pulse]`.
pub fn encode(
    values: &[u8],
    t: DistanceTimings,
    bit_length: Option<usize>,
    msb_first: bool,
) -> Result<Vec<u32>, Error> {
    if let Some(n) = bit_length {
        if n > values.len() * 8 {
            return Err(Error::data(format!(
                "bit_length {n} is greater than the number of bits in values"
            )));
        }
    }

    let bits = bits_of_bytes(values, bit_length, msb_first);
    let mut pulses = Vec::with_capacity(3 + bits.len() * 2);
    pulses.push(t.leading_pulse);
    pulses.push(t.leading_gap);
    for bit in bits {
        pulses.push(t.pulse);
        pulses.push(if bit { t.gap_1 } else { t.gap_0 });
    }
    pulses.push(t.pulse);
    Ok(pulses)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEC: DistanceTimings = DistanceTimings {
        leading_pulse: 9000,
        leading_gap: 4500,
        pulse: 560,
        gap_0: 560,
        gap_1: 1690,
    };

    #[test]
    fn encode_then_decode_roundtrips() {
        let pulses = encode(&[0x04, 0xFB, 0x08, 0xF7], NEC, None, false).unwrap();
        assert_eq!(pulses.len(), 3 + 2 * 32);
        let data = decode(&pulses, NEC, 32, false).unwrap();
        assert_eq!(data, vec![0x04, 0xFB, 0x08, 0xF7]);
    }

    #[test]
    fn rejects_bad_leading_pulse() {
        let err = decode(&[1273, 4500, 560, 560], NEC, 8, false).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rejects_short_train() {
        let err = decode(&[9000, 4500, 560], NEC, 32, false).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn bit_length_beyond_values_is_rejected() {
        let err = encode(&[0x00], NEC, Some(9), false).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn nec_pulse_prefix_matches_addr_0x04() {
        // addr=0x04 LSB-first is 0,0,1,0,0,0,0,0
        let pulses = encode(&[0x04, 0xFB], NEC, None, false).unwrap();
        assert_eq!(
            &pulses[..8],
            &[9000, 4500, 560, 560, 560, 560, 560, 1690]
        );
    }
}
