use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::*;

/// Arbitrary-precision decimal codec.
///
/// Layout: `[be32 scale][unscaled value, minimal big-endian two's complement]`.
/// The unscaled part is never empty (zero encodes as a single `0x00`), so a
/// valid encoding is at least [`Decimal::MIN_ENCODED_LEN`] bytes.
///
/// Decoding is lenient by contract: a buffer that is too short, or a range
/// that does not fit, yields `None` instead of an error.
pub struct Decimal;

impl Decimal {
    pub const MIN_ENCODED_LEN: usize = BeI32::WIDTH + 1;

    fn parts(v: &BigDecimal) -> Result<(i32, Vec<u8>)> {
        let (unscaled, scale) = v.as_bigint_and_exponent();
        let scale = scale.to_i32().ok_or_else(|| {
            Error::InvalidArgumentError(format!("decimal scale {scale} does not fit in 32 bits"))
        })?;
        Ok((scale, unscaled.to_signed_bytes_be()))
    }

    /// Number of bytes `v` occupies once encoded.
    pub fn encoded_len(v: &BigDecimal) -> Result<usize> {
        let (_, unscaled) = Self::parts(v)?;
        Ok(BeI32::WIDTH + unscaled.len())
    }

    pub fn to_bytes(v: &BigDecimal) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        Self::encode_into(&mut out, v)?;
        Ok(out)
    }

    pub fn encode_into(dst: &mut Vec<u8>, v: &BigDecimal) -> Result<()> {
        let (scale, unscaled) = Self::parts(v)?;
        dst.reserve(BeI32::WIDTH + unscaled.len());
        BeI32::encode_into(dst, scale);
        dst.extend_from_slice(&unscaled);
        Ok(())
    }

    /// Write `v` at `offset` inside caller-owned storage and return the
    /// offset just past the written bytes.
    pub fn put(dst: &mut [u8], offset: usize, v: &BigDecimal) -> Result<usize> {
        let (scale, unscaled) = Self::parts(v)?;
        let needed = BeI32::WIDTH + unscaled.len();
        if offset > dst.len() || dst.len() - offset < needed {
            return Err(Error::InsufficientCapacity {
                kind: "a decimal",
                offset,
                capacity: dst.len(),
            });
        }
        let next = BeI32::put(dst, offset, scale)?;
        dst[next..next + unscaled.len()].copy_from_slice(&unscaled);
        Ok(next + unscaled.len())
    }

    /// Decode the whole of `src`.
    #[inline]
    pub fn decode(src: &[u8]) -> Option<BigDecimal> {
        Self::decode_at(src, 0, src.len())
    }

    /// Decode `(offset, length)` of `src`, or `None` when the range is shorter
    /// than [`Self::MIN_ENCODED_LEN`] or runs past the end of `src`.
    pub fn decode_at(src: &[u8], offset: usize, length: usize) -> Option<BigDecimal> {
        if length < Self::MIN_ENCODED_LEN {
            return None;
        }
        let bytes = byte_range(src, offset, length).ok()?;
        let scale = BeI32::read(&bytes[..BeI32::WIDTH]);
        let unscaled = BigInt::from_signed_bytes_be(&bytes[BeI32::WIDTH..]);
        Some(BigDecimal::new(unscaled, i64::from(scale)))
    }
}
