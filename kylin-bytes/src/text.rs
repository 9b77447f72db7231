//! Printable and hexadecimal renderings of byte sequences.

use std::fmt::Write as _;

use kylin_result::{Error, Result};

/// Characters that pass through [`to_string_binary`] unescaped, besides
/// ASCII digits and letters.
const PRINTABLE_PUNCTUATION: &[u8] = b" `~!@#$%^&*()-_=+[]{}|;:'\",.<>/?";

#[inline]
fn is_printable(b: u8) -> bool {
    b.is_ascii_alphanumeric() || PRINTABLE_PUNCTUATION.contains(&b)
}

/// Render `bytes` with every non-printable byte escaped as `\xHH`
/// (uppercase hex).
pub fn to_string_binary(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if is_printable(b) {
            out.push(char::from(b));
        } else {
            // Writing into a String cannot fail.
            let _ = write!(out, "\\x{b:02X}");
        }
    }
    out
}

/// [`to_string_binary`] over `(offset, length)` of `bytes`.
///
/// Lenient about the range: an offset at or past the end renders as an
/// empty string and a length running past the end is clamped.
pub fn to_string_binary_range(bytes: &[u8], offset: usize, length: usize) -> String {
    if offset >= bytes.len() {
        return String::new();
    }
    let end = offset + length.min(bytes.len() - offset);
    to_string_binary(&bytes[offset..end])
}

#[inline]
fn upper_hex_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Parse the printable form produced by [`to_string_binary`].
///
/// `\xHH` with two uppercase hex digits becomes one byte. A backslash that
/// does not start a well-formed escape is dropped and the characters after
/// it are read literally. Any other character contributes its UTF-8 bytes.
pub fn to_bytes_binary(text: &str) -> Vec<u8> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' && chars.get(i + 1) == Some(&'x') {
            let hi = chars.get(i + 2).copied().and_then(upper_hex_value);
            let lo = chars.get(i + 3).copied().and_then(upper_hex_value);
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 4;
                }
                _ => i += 1,
            }
            continue;
        }
        let mut utf8 = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        i += 1;
    }
    out
}

/// Two uppercase hex characters per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::InvalidArgumentError(
            "length must be greater than 0".into(),
        ));
    }
    Ok(hex::encode_upper(bytes))
}

/// Inverse of [`to_hex`]; either letter case is accepted.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(Error::InvalidArgumentError(
            "length must be greater than 0".into(),
        ));
    }
    if text.len() % 2 != 0 {
        return Err(Error::InvalidArgumentError(
            "length must be a multiple of 2".into(),
        ));
    }
    hex::decode(text).map_err(Error::invalid_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_bytes_pass_through() {
        assert_eq!(to_string_binary(b"Az09 ~?"), "Az09 ~?");
        assert_eq!(to_string_binary(&[0x00, b'a', 0x7F, 0xFF]), "\\x00a\\x7F\\xFF");
        assert_eq!(to_string_binary(b"\\"), "\\x5C");
        assert_eq!(to_string_binary(b"\n"), "\\x0A");
    }

    #[test]
    fn printable_range_is_clamped() {
        let b = [b'a', b'b', 0x01];
        assert_eq!(to_string_binary_range(&b, 1, 10), "b\\x01");
        assert_eq!(to_string_binary_range(&b, 3, 1), "");
        assert_eq!(to_string_binary_range(&b, 0, 1), "a");
    }

    #[test]
    fn printable_form_parses_back() {
        let raw = [0x00u8, b'k', 0xAB, b'\\', b' ', 0x80];
        assert_eq!(to_bytes_binary(&to_string_binary(&raw)), raw);
    }

    #[test]
    fn malformed_escapes_drop_the_backslash() {
        assert_eq!(to_bytes_binary("\\xZZ"), b"xZZ");
        assert_eq!(to_bytes_binary("\\xab"), b"xab");
        assert_eq!(to_bytes_binary("a\\x"), b"ax");
        assert_eq!(to_bytes_binary("\\n"), b"\\n");
        assert_eq!(to_bytes_binary("é"), "é".as_bytes());
    }

    #[test]
    fn hex_is_uppercase_and_fixed_width() {
        assert_eq!(to_hex(&[0x00, 0x0A, 0xFF]).unwrap(), "000AFF");
        assert!(to_hex(&[]).is_err());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(from_hex("000AFF").unwrap(), vec![0x00, 0x0A, 0xFF]);
        assert_eq!(from_hex("0aff").unwrap(), vec![0x0A, 0xFF]);
        assert!(matches!(from_hex(""), Err(Error::InvalidArgumentError(_))));
        assert!(matches!(from_hex("ABC"), Err(Error::InvalidArgumentError(_))));
        assert!(matches!(from_hex("GG"), Err(Error::InvalidArgumentError(_))));
    }
}
