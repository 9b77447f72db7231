use super::*;

/// Big-endian two's-complement i32 codec.
pub struct BeI32;

impl FixedWidthCodec for BeI32 {
    const WIDTH: usize = 4;
    const KIND: &'static str = "an int";
    type Value = i32;

    #[inline]
    fn write(dst: &mut [u8], v: i32) {
        dst.copy_from_slice(&v.to_be_bytes());
    }

    #[inline]
    fn read(src: &[u8]) -> i32 {
        i32::from_be_bytes(be_array(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei32_boundaries_roundtrip() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            let mut buf = Vec::new();
            v.encode_into(&mut buf);
            assert_eq!(buf.len(), 4);
            assert_eq!(BeI32::decode(&buf).unwrap(), v);
        }
        assert_eq!(BeI32::to_bytes(1), vec![0, 0, 0, 1]);
        assert_eq!(BeI32::to_bytes(-1), vec![0xFF; 4]);
    }

    #[test]
    fn decode_at_checks_width_before_bounds() {
        let buf = [0u8; 6];
        assert!(matches!(
            BeI32::decode_at(&buf, 0, 3),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            BeI32::decode_at(&buf, 3, 4),
            Err(Error::OutOfBounds {
                offset: 3,
                length: 4,
                capacity: 6
            })
        ));
        assert_eq!(BeI32::decode_at(&buf, 2, 4).unwrap(), 0);
    }

    #[test]
    fn put_writes_in_place_and_advances() {
        let mut buf = [0xEEu8; 9];
        let off = BeI32::put(&mut buf, 1, 0x0102_0304).unwrap();
        let off = BeI32::put(&mut buf, off, -2).unwrap();
        assert_eq!(off, 9);
        assert_eq!(buf, [0xEE, 1, 2, 3, 4, 0xFF, 0xFF, 0xFF, 0xFE]);
        assert!(BeI32::put(&mut buf, 6, 0).is_err());
        assert!(BeI32::put(&mut buf, 12, 0).is_err());
    }
}
