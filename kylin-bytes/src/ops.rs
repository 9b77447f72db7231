//! Small helpers over byte arrays: concatenation, slicing, padding, filling.
//!
//! All helpers allocate their output or write into caller-owned storage for
//! the duration of the call only.

use kylin_result::{Error, Result};
use rand::RngCore;

use crate::codec::byte_range;

/// Copy `src` into `dst` at `offset` and return the offset past the copy.
pub fn put_bytes(dst: &mut [u8], offset: usize, src: &[u8]) -> Result<usize> {
    if offset > dst.len() || dst.len() - offset < src.len() {
        return Err(Error::OutOfBounds {
            offset,
            length: src.len(),
            capacity: dst.len(),
        });
    }
    dst[offset..offset + src.len()].copy_from_slice(src);
    Ok(offset + src.len())
}

/// Write a single byte at `offset` and return `offset + 1`.
pub fn put_byte(dst: &mut [u8], offset: usize, b: u8) -> Result<usize> {
    put_bytes(dst, offset, &[b])
}

pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    add3(a, b, &[])
}

pub fn add3(a: &[u8], b: &[u8], c: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + b.len() + c.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out.extend_from_slice(c);
    out
}

/// First `length` bytes of `a`, or `None` if `a` is shorter.
pub fn head(a: &[u8], length: usize) -> Option<Vec<u8>> {
    a.get(..length).map(<[u8]>::to_vec)
}

/// Last `length` bytes of `a`, or `None` if `a` is shorter.
pub fn tail(a: &[u8], length: usize) -> Option<Vec<u8>> {
    a.len()
        .checked_sub(length)
        .map(|start| a[start..].to_vec())
}

/// `a` with `length` zero bytes in front.
pub fn pad_head(a: &[u8], length: usize) -> Vec<u8> {
    add(&vec![0u8; length], a)
}

/// `a` with `length` zero bytes appended.
pub fn pad_tail(a: &[u8], length: usize) -> Vec<u8> {
    add(a, &vec![0u8; length])
}

pub fn copy_range(bytes: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
    Ok(byte_range(bytes, offset, length)?.to_vec())
}

fn checked_fill_range(buf: &[u8], offset: usize, length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::InvalidArgumentError(
            "length must be greater than 0".into(),
        ));
    }
    byte_range(buf, offset, length).map(|_| ())
}

pub fn zero(buf: &mut [u8]) {
    buf.fill(0);
}

/// Zero `(offset, length)` of `buf`; `length` must be positive.
pub fn zero_range(buf: &mut [u8], offset: usize, length: usize) -> Result<()> {
    checked_fill_range(buf, offset, length)?;
    buf[offset..offset + length].fill(0);
    Ok(())
}

/// Fill `buf` from the thread-local, OS-seeded generator.
pub fn random(buf: &mut [u8]) {
    rand::rng().fill_bytes(buf);
}

/// Randomize `(offset, length)` of `buf`; `length` must be positive.
pub fn random_range(buf: &mut [u8], offset: usize, length: usize) -> Result<()> {
    checked_fill_range(buf, offset, length)?;
    random(&mut buf[offset..offset + length]);
    Ok(())
}

/// `count` bytes of `0xFF`, the largest unsigned value of that width.
pub fn create_max_byte_array(count: usize) -> Vec<u8> {
    vec![0xFF; count]
}

/// `src` repeated `times` times; empty for non-positive `times`.
pub fn multiple(src: &[u8], times: i32) -> Vec<u8> {
    match usize::try_from(times) {
        Ok(n) if n > 0 => src.repeat(n),
        _ => Vec::new(),
    }
}
