//! Arithmetic on byte sequences read as big-endian integers.
//!
//! [`successor`] treats its input as an unsigned magnitude of any length.
//! [`increment_by`] treats its input as an 8-byte two's-complement value, so
//! its results only follow unsigned byte order while they stay on one side of
//! the sign boundary.

use kylin_result::{Error, Result};

use crate::SIZEOF_LONG;

/// The next unsigned big-endian value after `input`, as a new vector.
///
/// Carries propagate right to left. When every byte is already `0xFF` the
/// result grows by one byte with a leading `0x01` instead of wrapping, so
/// `[0xFF, 0xFF]` becomes `[0x01, 0x00, 0x00]`.
pub fn successor(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    for b in out.iter_mut().rev() {
        if *b == 0xFF {
            *b = 0;
        } else {
            *b += 1;
            return out;
        }
    }
    // Every byte overflowed.
    let mut grown = Vec::with_capacity(out.len() + 1);
    grown.push(1);
    grown.extend_from_slice(&out);
    grown
}

/// Add a signed `amount` to `value`, read as big-endian two's complement.
///
/// Inputs shorter than 8 bytes are sign-extended to 8 (leading `0xFF` when
/// the first byte has its high bit set, zeros otherwise); inputs longer than
/// 8 bytes are rejected. The result is always 8 bytes and wraps modulo 2^64.
pub fn increment_by(value: &[u8], amount: i64) -> Result<Vec<u8>> {
    if value.len() > SIZEOF_LONG {
        return Err(Error::InvalidArgumentError(format!(
            "increment bytes - value too big: {}",
            value.len()
        )));
    }
    let negative = value.first().is_some_and(|b| b & 0x80 != 0);
    let mut val = vec![if negative { 0xFF } else { 0x00 }; SIZEOF_LONG];
    val[SIZEOF_LONG - value.len()..].copy_from_slice(value);

    if amount == 0 {
        return Ok(val);
    }
    if negative {
        increment_negative(&mut val, amount);
    } else {
        increment_positive(&mut val, amount);
    }
    Ok(val)
}

/// Byte-wise add for a value whose sign bit is clear.
fn increment_positive(value: &mut [u8], amount: i64) {
    let sign: i32 = if amount < 0 { -1 } else { 1 };
    let mut amo = amount.unsigned_abs();
    for slot in value.iter_mut().rev() {
        let cur = (amo % 256) as i32 * sign;
        amo >>= 8;
        let total = i32::from(*slot) + cur;
        if !(0..=255).contains(&total) {
            // Carry on overflow, borrow on underflow; both grow the remaining magnitude.
            amo += 1;
        }
        *slot = total.rem_euclid(256) as u8;
        if amo == 0 {
            return;
        }
    }
}

/// Byte-wise add for a value whose sign bit is set.
///
/// Each byte is taken as its two's-complement distance below 256
/// (`(!b & 0xFF) + 1`), and the carry is decided against that distance.
fn increment_negative(value: &mut [u8], amount: i64) {
    let sign: i32 = if amount < 0 { -1 } else { 1 };
    let mut amo = amount.unsigned_abs();
    for slot in value.iter_mut().rev() {
        let cur = (amo % 256) as i32 * sign;
        amo >>= 8;
        let below = i32::from(!*slot) + 1;
        let total = cur - below;
        if total >= 0 || total < -256 {
            amo += 1;
        }
        *slot = total.rem_euclid(256) as u8;
        if amo == 0 {
            return;
        }
    }
}
