use super::*;

/// Big-endian two's-complement i16 codec.
pub struct BeI16;

impl BeI16 {
    /// Write the low 16 bits of an `i32` at `offset`.
    pub fn put_as_short(dst: &mut [u8], offset: usize, v: i32) -> Result<usize> {
        Self::put(dst, offset, v as i16)
    }
}

impl FixedWidthCodec for BeI16 {
    const WIDTH: usize = 2;
    const KIND: &'static str = "a short";
    type Value = i16;

    #[inline]
    fn write(dst: &mut [u8], v: i16) {
        dst.copy_from_slice(&v.to_be_bytes());
    }

    #[inline]
    fn read(src: &[u8]) -> i16 {
        i16::from_be_bytes(be_array(src))
    }
}
