//! Manchester coding, used by RC5 and RC6.
//!
//! Each logical bit is two half-bits of `T` microseconds with a mid-bit
//! transition; direction encodes the value, inverted when `phase` is set.
//! RC6's trailer/toggle bit is a "double bit": its half-bits run for `2T`
//! instead of `T`, and must be stripped back down to ordinary half-bits
//! before the rest of the stream is interpreted.

use crate::bits::pack_bits;
use crate::error::Error;

/// Parameters shared by Manchester encode and decode for one protocol.
#[derive(Debug, Clone)]
pub struct ManchesterParams<'a> {
    /// Duration of one half-bit, in microseconds.
    pub t: u32,
    /// Expected half-bit pattern at the very front of the stream (RC5:
    /// `[true]`; RC6: six `true` then two `false`).
    pub start_sequence: &'a [bool],
    /// `true` inverts every half-bit after the double-bit pass; see
    /// half-bit expansion described in the module docs above.
    pub phase: bool,
    /// Logical bit indices (0-based) whose half-bits run twice as long.
    pub double_bits: &'a [usize],
    pub msb_first: bool,
}

/// Decode a Manchester pulse train into a byte sequence carrying exactly
/// `bit_length` logical bits.
pub fn decode(pulses: &[u32], p: &ManchesterParams, bit_length: usize) -> Result<Vec<u8>, Error> {
    let mut half_bits = Vec::new();
    for (i, &v) in pulses.iter().enumerate() {
        let n = round_div(v, p.t);
        let mark = i % 2 == 0;
        half_bits.resize(half_bits.len() + n, mark);
    }

    if half_bits.len() < p.start_sequence.len() || half_bits[..p.start_sequence.len()] != *p.start_sequence {
        return Err(Error::data("invalid start sequence"));
    }
    let mut half_bits = half_bits.split_off(p.start_sequence.len());

    let mut doubled: Vec<usize> = p.double_bits.to_vec();
    doubled.sort_unstable();
    for &i in doubled.iter().rev() {
        let base = i * 2;
        if base + 4 > half_bits.len()
            || half_bits[base] != half_bits[base + 1]
            || half_bits[base + 2] != half_bits[base + 3]
        {
            return Err(Error::data("invalid double bit"));
        }
        // keep [0..=base] then [base+3..]
        let mut collapsed = half_bits[..=base].to_vec();
        collapsed.extend_from_slice(&half_bits[base + 3..]);
        half_bits = collapsed;
    }

    if half_bits.len() % 2 == 1 {
        half_bits.push(false);
    }

    if half_bits.len() < bit_length * 2 {
        return Err(Error::data(format!(
            "invalid data length: {} (must be at least {})",
            half_bits.len(),
            bit_length * 2
        )));
    }

    if p.phase {
        for b in half_bits.iter_mut() {
            *b = !*b;
        }
    }

    let mut bits = Vec::with_capacity(bit_length);
    for i in 0..bit_length {
        let bit = match (half_bits[i * 2], half_bits[i * 2 + 1]) {
            (false, true) => true,
            (true, false) => false,
            _ => return Err(Error::data("invalid bit sequence")),
        };
        bits.push(bit);
    }

    Ok(pack_bits(bits.into_iter(), bit_length, p.msb_first))
}

/// Encode `values` (optionally truncated to `bit_length` bits) into a
/// Manchester pulse train.
pub fn encode(
    values: &[u8],
    p: &ManchesterParams,
    bit_length: Option<usize>,
) -> Result<Vec<u32>, Error> {
    if let Some(n) = bit_length {
        if n > values.len() * 8 {
            return Err(Error::data(format!(
                "bit_length {n} is greater than the number of bits in values"
            )));
        }
    }

    let mut half_bits: Vec<bool> = p.start_sequence.to_vec();
    let mut total = 0usize;
    'outer: for &byte in values {
        for bit in 0..8 {
            let set = if p.msb_first {
                (byte >> (7 - bit)) & 1 != 0
            } else {
                (byte >> bit) & 1 != 0
            };
            let (h0, h1) = if set != p.phase { (false, true) } else { (true, false) };
            if p.double_bits.contains(&total) {
                // The whole logical bit repeats, not just its second half:
                // h0,h0,h1,h1, matching decode's four-half-bit collapse.
                half_bits.push(h0);
                half_bits.push(h0);
                half_bits.push(h1);
                half_bits.push(h1);
            } else {
                half_bits.push(h0);
                half_bits.push(h1);
            }
            total += 1;
            if let Some(n) = bit_length {
                if total >= n {
                    break 'outer;
                }
            }
        }
    }

    let mut pulses = Vec::new();
    let mut last_mark: Option<bool> = None;
    for v in half_bits {
        if last_mark == Some(v) {
            *pulses.last_mut().unwrap() += p.t;
        } else {
            pulses.push(p.t);
            last_mark = Some(v);
        }
    }

    if pulses.len() % 2 == 0 {
        pulses.pop();
    }
    Ok(pulses)
}

/// Rounds `v / t` to the nearest integer (half rounds up), never zero when
/// `v > 0`.
fn round_div(v: u32, t: u32) -> usize {
    ((2 * v as u64 + t as u64) / (2 * t as u64)) as usize
}
