use super::*;

/// Big-endian two's-complement i64 codec.
///
/// No sign-bit flip is applied, so negative values sort after non-negative
/// ones under unsigned byte order.
pub struct BeI64;

impl FixedWidthCodec for BeI64 {
    const WIDTH: usize = 8;
    const KIND: &'static str = "a long";
    type Value = i64;

    #[inline]
    fn write(dst: &mut [u8], v: i64) {
        dst.copy_from_slice(&v.to_be_bytes());
    }

    #[inline]
    fn read(src: &[u8]) -> i64 {
        i64::from_be_bytes(be_array(src))
    }
}
