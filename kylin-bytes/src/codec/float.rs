use super::*;

/// IEEE-754 single precision stored as its raw bit pattern in a [`BeI32`] slot.
///
/// NaN payloads and signed zeros survive a round trip unchanged.
pub struct BeF32;

impl FixedWidthCodec for BeF32 {
    const WIDTH: usize = 4;
    const KIND: &'static str = "a float";
    type Value = f32;

    #[inline]
    fn write(dst: &mut [u8], v: f32) {
        BeI32::write(dst, v.to_bits() as i32);
    }

    #[inline]
    fn read(src: &[u8]) -> f32 {
        f32::from_bits(BeI32::read(src) as u32)
    }
}

/// IEEE-754 double precision stored as its raw bit pattern in a [`BeI64`] slot.
pub struct BeF64;

impl FixedWidthCodec for BeF64 {
    const WIDTH: usize = 8;
    const KIND: &'static str = "a double";
    type Value = f64;

    #[inline]
    fn write(dst: &mut [u8], v: f64) {
        BeI64::write(dst, v.to_bits() as i64);
    }

    #[inline]
    fn read(src: &[u8]) -> f64 {
        f64::from_bits(BeI64::read(src) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_bit_patterns_survive() {
        let quiet_nan = f32::from_bits(0x7FC0_0001);
        for v in [
            0.0f32,
            -0.0,
            1.5,
            f32::MIN,
            f32::MAX,
            f32::INFINITY,
            f32::NEG_INFINITY,
            quiet_nan,
        ] {
            let enc = BeF32::to_bytes(v);
            assert_eq!(enc, BeI32::to_bytes(v.to_bits() as i32));
            assert_eq!(BeF32::decode(&enc).unwrap().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn f64_bit_patterns_survive() {
        let signalling_nan = f64::from_bits(0x7FF0_0000_0000_0001);
        for v in [
            0.0f64,
            -0.0,
            -2.25,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::NEG_INFINITY,
            signalling_nan,
        ] {
            let mut buf = Vec::new();
            v.encode_into(&mut buf);
            assert_eq!(buf, v.to_bits().to_be_bytes());
            assert_eq!(BeF64::decode(&buf).unwrap().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn float_width_is_checked() {
        assert!(matches!(
            BeF64::decode_at(&[0u8; 8], 0, 4),
            Err(Error::SizeMismatch {
                expected: 8,
                actual: 4
            })
        ));
        let mut buf = [0u8; 4];
        assert_eq!(BeF32::put(&mut buf, 0, 1.0).unwrap(), 4);
        assert_eq!(buf, [0x3F, 0x80, 0x00, 0x00]);
    }
}
