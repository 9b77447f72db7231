use std::borrow::Cow;
use std::io::{Read, Write};

use super::*;
use crate::text::to_string_binary;

/// Plain UTF-8 text codec; the encoding is the string's own bytes.
pub struct Utf8;

impl Utf8 {
    #[inline]
    pub fn to_bytes(s: &str) -> Vec<u8> {
        s.as_bytes().to_vec()
    }

    /// Decode possibly-absent bytes. Invalid sequences become U+FFFD.
    #[inline]
    pub fn decode(src: Option<&[u8]>) -> Option<String> {
        src.map(|b| Self::decode_lossy(b).into_owned())
    }

    #[inline]
    pub fn decode_lossy(src: &[u8]) -> Cow<'_, str> {
        String::from_utf8_lossy(src)
    }

    /// Decode the byte range `(offset, length)` of `src`.
    pub fn decode_at(src: &[u8], offset: usize, length: usize) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        Ok(Self::decode_lossy(byte_range(src, offset, length)?).into_owned())
    }

    /// Two byte sequences rendered as text and joined by `sep`.
    pub fn join(a: &[u8], sep: &str, b: &[u8]) -> String {
        format!("{}{sep}{}", Self::decode_lossy(a), Self::decode_lossy(b))
    }
}

/// Write `s` into a `size`-byte field, zero-padding the remainder.
///
/// Used by legacy fixed-record formats. Fails with
/// [`Error::FieldOverflow`] when the UTF-8 bytes do not fit.
pub fn write_string_fixed_size<W: Write>(out: &mut W, s: &str, size: usize) -> Result<()> {
    let bytes = s.as_bytes();
    if bytes.len() > size {
        return Err(Error::FieldOverflow {
            actual: bytes.len(),
            size,
            printable: to_string_binary(bytes),
        });
    }
    out.write_all(bytes)?;
    out.write_all(&vec![0u8; size - bytes.len()])?;
    Ok(())
}

/// Read a `size`-byte field and strip trailing zero padding.
pub fn read_string_fixed_size<R: Read>(input: &mut R, size: usize) -> Result<String> {
    let mut field = vec![0u8; size];
    input.read_exact(&mut field)?;
    let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Utf8::decode_at(&field, 0, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn utf8_passthrough() {
        assert_eq!(Utf8::to_bytes("héllo"), "héllo".as_bytes());
        assert_eq!(Utf8::decode(Some("héllo".as_bytes())).as_deref(), Some("héllo"));
        assert_eq!(Utf8::decode(None), None);
        assert_eq!(Utf8::decode(Some(&[])).as_deref(), Some(""));
        assert_eq!(Utf8::decode_at(b"abcdef", 2, 3).unwrap(), "cde");
        assert_eq!(Utf8::decode_at(b"abc", 9, 0).unwrap(), "");
        assert!(Utf8::decode_at(b"abc", 2, 3).is_err());
        assert_eq!(Utf8::join(b"a", "::", b"b"), "a::b");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(Utf8::decode_lossy(&[b'a', 0xFF]), "a\u{FFFD}");
    }

    #[test]
    fn fixed_size_field_roundtrip() {
        let mut out = Vec::new();
        write_string_fixed_size(&mut out, "cube", 8).unwrap();
        write_string_fixed_size(&mut out, "", 2).unwrap();
        assert_eq!(out, b"cube\0\0\0\0\0\0");

        let mut input = Cursor::new(out);
        assert_eq!(read_string_fixed_size(&mut input, 8).unwrap(), "cube");
        assert_eq!(read_string_fixed_size(&mut input, 2).unwrap(), "");
        assert!(matches!(
            read_string_fixed_size(&mut input, 1),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let mut out = Vec::new();
        let err = write_string_fixed_size(&mut out, "segment\n", 4).unwrap_err();
        assert!(matches!(
            err,
            Error::FieldOverflow {
                actual: 8,
                size: 4,
                ..
            }
        ));
        assert!(err.to_string().contains("segment\\x0A"));
        assert!(out.is_empty());
    }
}
