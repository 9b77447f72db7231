//! Stable polynomial hashing of byte sequences and a map-key wrapper built on it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use kylin_result::Result;

use crate::codec::byte_range;
use crate::compare::Comparator;
use crate::text::to_string_binary;

/// `h = 31 * h + b` over every byte, seeded with 1.
///
/// Bytes enter as signed 8-bit values, so `0x80..=0xFF` contribute negative
/// terms. The result is deterministic across processes and not cryptographic.
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(1i32, |h, &b| h.wrapping_mul(31).wrapping_add(i32::from(b as i8)))
}

/// [`hash_bytes`] over the range `(offset, length)` of `bytes`.
#[inline]
pub fn hash_range(bytes: &[u8], offset: usize, length: usize) -> Result<i32> {
    Ok(hash_bytes(byte_range(bytes, offset, length)?))
}

/// Integer surrogate used when a byte sequence keys a map.
#[inline]
pub fn map_key(bytes: &[u8]) -> i32 {
    hash_bytes(bytes)
}

/// An owned byte sequence that can key a `HashMap` or `BTreeMap`.
///
/// Hashing uses [`hash_bytes`], equality uses [`Comparator::equals`] and
/// ordering uses the process-wide [`Comparator`].
#[derive(Clone, Default)]
pub struct ByteKey(Vec<u8>);

impl ByteKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        ByteKey(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteKey {
    fn from(bytes: Vec<u8>) -> Self {
        ByteKey(bytes)
    }
}

impl From<&[u8]> for ByteKey {
    fn from(bytes: &[u8]) -> Self {
        ByteKey(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Hash for ByteKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(hash_bytes(&self.0));
    }
}

impl PartialEq for ByteKey {
    fn eq(&self, other: &Self) -> bool {
        Comparator::global().equals(&self.0, &other.0)
    }
}

impl Eq for ByteKey {}

impl PartialOrd for ByteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::global().compare(&self.0, &other.0)
    }
}

impl fmt::Debug for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteKey({})", to_string_binary(&self.0))
    }
}

impl fmt::Display for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string_binary(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn hash_matches_signed_polynomial() {
        assert_eq!(hash_bytes(&[]), 1);
        assert_eq!(hash_bytes(&[1]), 31 + 1);
        assert_eq!(hash_bytes(&[1, 2]), (31 + 1) * 31 + 2);
        // 0xFF contributes -1, not 255.
        assert_eq!(hash_bytes(&[0xFF]), 31 - 1);
        assert_eq!(hash_bytes(b"ab"), (31 + 97) * 31 + 98);
    }

    #[test]
    fn hash_is_order_sensitive_and_wraps() {
        assert_ne!(hash_bytes(b"ab"), hash_bytes(b"ba"));
        let long = vec![0x7Fu8; 4096];
        // Must not panic on overflow.
        let _ = hash_bytes(&long);
        assert_eq!(hash_range(b"xxab", 2, 2).unwrap(), hash_bytes(b"ab"));
        assert!(hash_range(b"ab", 1, 2).is_err());
        assert_eq!(map_key(b"ab"), hash_bytes(b"ab"));
    }

    #[test]
    fn byte_key_in_maps() {
        let mut counts: HashMap<ByteKey, u32> = HashMap::new();
        *counts.entry(ByteKey::new(b"seg".to_vec())).or_default() += 1;
        *counts.entry(ByteKey::from(&b"seg"[..])).or_default() += 1;
        *counts.entry(ByteKey::from(vec![0xFF])).or_default() += 1;
        assert_eq!(counts[&ByteKey::new(b"seg".to_vec())], 2);
        assert_eq!(counts.len(), 2);

        let ordered: BTreeSet<ByteKey> = [vec![0x80], vec![0x01], vec![0x01, 0x00]]
            .into_iter()
            .map(ByteKey::from)
            .collect();
        let keys: Vec<Vec<u8>> = ordered.into_iter().map(ByteKey::into_inner).collect();
        assert_eq!(keys, vec![vec![0x01], vec![0x01, 0x00], vec![0x80]]);
    }

    #[test]
    fn byte_key_formats_printably() {
        let k = ByteKey::new(vec![b'a', 0x00]);
        assert_eq!(k.to_string(), "a\\x00");
        assert_eq!(format!("{k:?}"), "ByteKey(a\\x00)");
    }
}
