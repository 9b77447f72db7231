//! Fixed-width and variable-width codecs for typed key components.
//!
//! ## Byte layouts
//!
//! | Type    | Layout                                                        |
//! |---------|---------------------------------------------------------------|
//! | bool    | 1 byte: `0xFF` = true, `0x00` = false; any nonzero decodes true |
//! | i16     | 2 bytes, big-endian two's complement                          |
//! | i32     | 4 bytes, big-endian two's complement                          |
//! | i64     | 8 bytes, big-endian two's complement                          |
//! | f32     | 4 bytes, big-endian IEEE-754 bit pattern                      |
//! | f64     | 8 bytes, big-endian IEEE-754 bit pattern                      |
//! | decimal | be32 scale, then big-endian two's-complement unscaled value   |
//!
//! ## A Note on Sign and Sort Order
//!
//! Integers are stored as plain two's complement, **not** sign-flipped. Under
//! the unsigned lexicographic comparator, order is preserved only within one
//! sign domain: `encode(-1)` (`FF..`) sorts after `encode(0)` (`00..`). Files
//! written by other components depend on these exact bytes, so the layout is
//! kept as is.

#![forbid(unsafe_code)]

use kylin_result::{Error, Result};

pub mod boolean;
pub use boolean::*;

pub mod be_i16;
pub use be_i16::*;

pub mod be_i32;
pub use be_i32::*;

pub mod be_i64;
pub use be_i64::*;

pub mod float;
pub use float::*;

pub mod decimal;
pub use decimal::*;

pub mod utf8;
pub use utf8::*;

/// A zero-overhead codec API for one fixed-width logical type.
///
/// Implementors only provide [`write`](Self::write) and [`read`](Self::read)
/// over exactly [`WIDTH`](Self::WIDTH) bytes; the provided methods add the
/// length and bounds checks shared by every fixed-width type.
pub trait FixedWidthCodec {
    /// Exact encoded width in bytes.
    const WIDTH: usize;

    /// Article + type name used in capacity errors ("a long", "an int").
    const KIND: &'static str;

    type Value: Copy;

    /// Write `v` into `dst`, which is exactly `WIDTH` bytes long.
    fn write(dst: &mut [u8], v: Self::Value);

    /// Read a value from `src`, which is exactly `WIDTH` bytes long.
    fn read(src: &[u8]) -> Self::Value;

    /// Encode into a fresh `WIDTH`-byte vector.
    #[inline]
    fn to_bytes(v: Self::Value) -> Vec<u8> {
        let mut out = vec![0u8; Self::WIDTH];
        Self::write(&mut out, v);
        out
    }

    /// Append the encoding of `v` to `dst`.
    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: Self::Value) {
        let start = dst.len();
        dst.resize(start + Self::WIDTH, 0);
        Self::write(&mut dst[start..], v);
    }

    /// Write `v` at `offset` inside caller-owned storage and return the
    /// offset just past the written bytes.
    #[inline]
    fn put(dst: &mut [u8], offset: usize, v: Self::Value) -> Result<usize> {
        if offset > dst.len() || dst.len() - offset < Self::WIDTH {
            return Err(Error::InsufficientCapacity {
                kind: Self::KIND,
                offset,
                capacity: dst.len(),
            });
        }
        Self::write(&mut dst[offset..offset + Self::WIDTH], v);
        Ok(offset + Self::WIDTH)
    }

    /// Decode the first `WIDTH` bytes of `src`; trailing bytes are ignored.
    #[inline]
    fn decode(src: &[u8]) -> Result<Self::Value> {
        Self::decode_at(src, 0, Self::WIDTH)
    }

    /// Decode `WIDTH` bytes starting at `offset`.
    #[inline]
    fn decode_from(src: &[u8], offset: usize) -> Result<Self::Value> {
        Self::decode_at(src, offset, Self::WIDTH)
    }

    /// Decode the byte range `(offset, length)` of `src`.
    ///
    /// Fails with [`Error::SizeMismatch`] when `length != WIDTH` and with
    /// [`Error::OutOfBounds`] when the range runs past the end of `src`.
    #[inline]
    fn decode_at(src: &[u8], offset: usize, length: usize) -> Result<Self::Value> {
        let in_bounds = offset
            .checked_add(length)
            .is_some_and(|end| end <= src.len());
        if length != Self::WIDTH || !in_bounds {
            return Err(Error::wrong_length_or_offset(
                src.len(),
                offset,
                length,
                Self::WIDTH,
            ));
        }
        Ok(Self::read(&src[offset..offset + length]))
    }
}

/// Borrow `(offset, length)` of `buf`, or fail with [`Error::OutOfBounds`].
#[inline]
pub fn byte_range(buf: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset
        .checked_add(length)
        .and_then(|end| buf.get(offset..end))
        .ok_or(Error::OutOfBounds {
            offset,
            length,
            capacity: buf.len(),
        })
}

/// Copy the first `N` bytes of `src` into an array.
#[inline(always)]
pub(crate) fn be_array<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&src[..N]);
    out
}

/// Fold up to four big-endian bytes at `(offset, length)` into an `i32`.
///
/// Unlike [`BeI32::decode_at`] this does not insist on a 4-byte width, so a
/// 1-, 2- or 3-byte field reads as a non-negative value.
pub fn read_as_int(src: &[u8], offset: usize, length: usize) -> Result<i32> {
    let bytes = byte_range(src, offset, length)?;
    Ok(bytes
        .iter()
        .fold(0i32, |n, &b| (n << 8) ^ i32::from(b)))
}

/* ---------------------- Value-side encode convenience ------------------- */

/// Default, value-side encoding: `v.encode_into(&mut buf)`.
///
/// One default codec per native type to keep call sites simple.
pub trait EncodeInto {
    fn encode_into(&self, dst: &mut Vec<u8>);
}

impl EncodeInto for bool {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Bool::encode_into(dst, *self);
    }
}

impl EncodeInto for i16 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI16::encode_into(dst, *self);
    }
}

impl EncodeInto for i32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI32::encode_into(dst, *self);
    }
}

impl EncodeInto for i64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI64::encode_into(dst, *self);
    }
}

impl EncodeInto for f32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeF32::encode_into(dst, *self);
    }
}

impl EncodeInto for f64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeF64::encode_into(dst, *self);
    }
}

// Strings → raw UTF-8
impl EncodeInto for str {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.as_bytes());
    }
}
impl EncodeInto for String {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        self.as_str().encode_into(dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_range_rejects_overflowing_offsets() {
        let buf = [1u8, 2, 3];
        assert_eq!(byte_range(&buf, 1, 2).unwrap(), &[2, 3]);
        assert!(byte_range(&buf, 2, 2).is_err());
        assert!(byte_range(&buf, usize::MAX, 2).is_err());
        assert!(byte_range(&buf, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn read_as_int_accepts_short_fields() {
        let buf = [0x00u8, 0x01, 0x02, 0xFF];
        assert_eq!(read_as_int(&buf, 1, 2).unwrap(), 0x0102);
        assert_eq!(read_as_int(&buf, 3, 1).unwrap(), 0xFF);
        assert_eq!(read_as_int(&buf, 0, 4).unwrap(), 0x0001_02FF);
        assert!(matches!(
            read_as_int(&buf, 2, 4),
            Err(Error::OutOfBounds { capacity: 4, .. })
        ));
    }

    #[test]
    fn encode_into_appends_after_existing_bytes() {
        let mut buf = vec![0xAA];
        7i32.encode_into(&mut buf);
        true.encode_into(&mut buf);
        "k".encode_into(&mut buf);
        assert_eq!(buf, vec![0xAA, 0, 0, 0, 7, 0xFF, b'k']);
    }
}
