//! Pulse-width modulation: fixed inter-symbol space, bit value carried in
//! the mark width. Used by the Sony SIRC family.

use crate::bits::{bits_of_bytes, pack_bits};
use crate::error::Error;
use crate::tolerance::in_range;

/// Timing parameters for one pulse-width framing.
#[derive(Debug, Clone, Copy)]
pub struct WidthTimings {
    pub leading_pulse: u32,
    pub leading_gap: u32,
    pub gap: u32,
    pub pulse_0: u32,
    pub pulse_1: u32,
}

/// Decode `pulses` into a byte sequence carrying exactly `bit_length` bits.
pub fn decode(
    pulses: &[u32],
    t: WidthTimings,
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
    let required = 2 + bit_length * 2;
    if pulses.len() < required {
        return Err(Error::data(format!(
            "invalid data length: {} (must be at least {required})",
            pulses.len()
        )));
    }

    let long_is_one = t.pulse_1 > t.pulse_0;
    let short_is_one = !long_is_one;
    let threshold = (t.pulse_0 as u64 + t.pulse_1 as u64) / 2;

    let mut bits = Vec::with_capacity(bit_length);
    for i in 0..bit_length {
        let p = 2 + i * 2;
        let mark = pulses[p];
        if !in_range(mark, t.pulse_0) && !in_range(mark, t.pulse_1) {
            return Err(Error::data(format!("invalid pulse length: {mark}")));
        }
        let bit = if mark as u64 > threshold { long_is_one } else { short_is_one };
        bits.push(bit);
        if i + 1 < bit_length {
            let gap = pulses[p + 1];
            if !in_range(gap, t.gap) {
                return Err(Error::data(format!("invalid gap length: {gap}")));
            }
        }
    }

    Ok(pack_bits(bits.into_iter(), bit_length, msb_first))
}

/// Encode `values` (optionally truncated to `bit_length` bits) into a pulse
/// train: `[leading_pulse, leading_gap, mark, gap, mark, gap, ..., mark]`
/// with no trailing mark.
pub fn encode(
    values: &[u8],
    t: WidthTimings,
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
    let mut pulses = Vec::with_capacity(2 + bits.len() * 2);
    pulses.push(t.leading_pulse);
    pulses.push(t.leading_gap);
    let n = bits.len();
    for (i, bit) in bits.into_iter().enumerate() {
        pulses.push(if bit { t.pulse_1 } else { t.pulse_0 });
        if i + 1 < n {
            pulses.push(t.gap);
        }
    }
    Ok(pulses)
}
