use super::*;

/// Codec for bool. `true` -> `0xFF`, `false` -> `0x00`.
pub struct Bool;

impl FixedWidthCodec for Bool {
    const WIDTH: usize = 1;
    const KIND: &'static str = "a boolean";
    type Value = bool;

    #[inline]
    fn write(dst: &mut [u8], v: bool) {
        dst[0] = if v { 0xFF } else { 0x00 };
    }

    #[inline]
    fn read(src: &[u8]) -> bool {
        src[0] != 0
    }

    /// Unlike the numeric codecs, a boolean array must be exactly one byte.
    #[inline]
    fn decode(src: &[u8]) -> Result<bool> {
        if src.len() != Self::WIDTH {
            return Err(Error::SizeMismatch {
                expected: Self::WIDTH,
                actual: src.len(),
            });
        }
        Ok(Self::read(src))
    }
}
