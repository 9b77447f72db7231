//! Unsigned lexicographic ordering of byte sequences.
//!
//! Two strategies implement the same total order:
//!
//! - [`Comparator::Portable`]: one unsigned byte at a time.
//! - [`Comparator::Word`]: 8/4/2/1-byte big-endian word loads.
//!
//! Exactly one strategy is active per process. It is installed once, either
//! explicitly at startup through [`Comparator::init`] or lazily by the first
//! call to [`Comparator::global`], and never changes afterwards. Callers that
//! want to avoid the global lookup can hold the returned `&'static Comparator`
//! and call its methods directly.

use std::cmp::Ordering;
use std::sync::OnceLock;

use kylin_result::Result;
use tracing::debug;

use crate::codec::byte_range;

mod portable;
mod word;

/// A comparison strategy over unsigned byte sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Byte-wise loop. Always available.
    Portable,
    /// Word-at-a-time fast path for 64-bit targets.
    Word,
}

static INSTALLED: OnceLock<Comparator> = OnceLock::new();

impl Comparator {
    /// Choose the best strategy this build can run.
    ///
    /// The `portable-comparer` feature, or a target without 64-bit words,
    /// pins the portable strategy.
    pub fn probe() -> Comparator {
        if cfg!(feature = "portable-comparer") {
            debug!("comparator: word path disabled by the portable-comparer feature");
            Comparator::Portable
        } else if cfg!(target_pointer_width = "64") {
            Comparator::Word
        } else {
            debug!("comparator: no 64-bit words on this target, using portable path");
            Comparator::Portable
        }
    }

    /// Install `kind` as the process-wide strategy.
    ///
    /// The first installation wins; if a strategy is already active (from an
    /// earlier `init` or a lazy [`global`](Self::global) call) it is returned
    /// unchanged.
    pub fn init(kind: Comparator) -> &'static Comparator {
        let active = INSTALLED.get_or_init(|| {
            debug!(strategy = kind.name(), "comparator installed");
            kind
        });
        if *active != kind {
            debug!(
                requested = kind.name(),
                active = active.name(),
                "comparator already installed, keeping the active strategy"
            );
        }
        active
    }

    /// The process-wide strategy, probing on first use.
    #[inline]
    pub fn global() -> &'static Comparator {
        INSTALLED.get_or_init(|| {
            let kind = Self::probe();
            debug!(strategy = kind.name(), "comparator selected");
            kind
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Comparator::Portable => "portable",
            Comparator::Word => "word",
        }
    }

    /// Compare two byte sequences as unsigned bytes, shorter-first on a tie.
    #[inline]
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        // Same storage, same offset, same length.
        if a.as_ptr() == b.as_ptr() && a.len() == b.len() {
            return Ordering::Equal;
        }
        match self {
            Comparator::Portable => portable::compare(a, b),
            Comparator::Word => word::compare(a, b),
        }
    }

    /// Compare the byte ranges `(a_off, a_len)` of `a` and `(b_off, b_len)` of `b`.
    pub fn compare_ranges(
        &self,
        a: &[u8],
        a_off: usize,
        a_len: usize,
        b: &[u8],
        b_off: usize,
        b_len: usize,
    ) -> Result<Ordering> {
        let left = byte_range(a, a_off, a_len)?;
        let right = byte_range(b, b_off, b_len)?;
        Ok(self.compare(left, right))
    }

    /// `compare(a, b) == Equal`, skipping the full comparison when the lengths
    /// or the last bytes already differ.
    #[inline]
    pub fn equals(&self, a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        match (a.last(), b.last()) {
            (None, None) => true,
            // Adjacent sorted keys usually differ in the final byte.
            (Some(x), Some(y)) if x != y => false,
            _ => self.compare(a, b) == Ordering::Equal,
        }
    }

    pub fn equals_ranges(
        &self,
        a: &[u8],
        a_off: usize,
        a_len: usize,
        b: &[u8],
        b_off: usize,
        b_len: usize,
    ) -> Result<bool> {
        let left = byte_range(a, a_off, a_len)?;
        let right = byte_range(b, b_off, b_len)?;
        Ok(self.equals(left, right))
    }

    #[inline]
    pub fn starts_with(&self, bytes: &[u8], prefix: &[u8]) -> bool {
        bytes.len() >= prefix.len()
            && self.compare(&bytes[..prefix.len()], prefix) == Ordering::Equal
    }
}

/// [`Comparator::compare`] on the process-wide strategy.
#[inline]
pub fn compare_to(a: &[u8], b: &[u8]) -> Ordering {
    Comparator::global().compare(a, b)
}

/// [`Comparator::compare_ranges`] on the process-wide strategy.
#[inline]
pub fn compare_to_range(
    a: &[u8],
    a_off: usize,
    a_len: usize,
    b: &[u8],
    b_off: usize,
    b_len: usize,
) -> Result<Ordering> {
    Comparator::global().compare_ranges(a, a_off, a_len, b, b_off, b_len)
}

/// [`Comparator::equals`] on the process-wide strategy.
#[inline]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    Comparator::global().equals(a, b)
}

/// [`Comparator::equals_ranges`] on the process-wide strategy.
#[inline]
pub fn equals_range(
    a: &[u8],
    a_off: usize,
    a_len: usize,
    b: &[u8],
    b_off: usize,
    b_len: usize,
) -> Result<bool> {
    Comparator::global().equals_ranges(a, a_off, a_len, b, b_off, b_len)
}

/// [`Comparator::starts_with`] on the process-wide strategy.
#[inline]
pub fn starts_with(bytes: &[u8], prefix: &[u8]) -> bool {
    Comparator::global().starts_with(bytes, prefix)
}

/// Element-wise [`equals`] over two lists of byte sequences.
pub fn equals_all<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let cmp = Comparator::global();
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| cmp.equals(x.as_ref(), y.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Comparator; 2] = [Comparator::Portable, Comparator::Word];

    #[test]
    fn unsigned_bytes_and_length_tiebreak() {
        for cmp in BOTH {
            assert_eq!(cmp.compare(&[0x7F], &[0x80]), Ordering::Less, "{cmp:?}");
            assert_eq!(cmp.compare(&[0xFF], &[0x00, 0x00]), Ordering::Greater);
            assert_eq!(cmp.compare(b"abc", b"abcd"), Ordering::Less);
            assert_eq!(cmp.compare(b"", b""), Ordering::Equal);
            assert_eq!(cmp.compare(b"", b"\0"), Ordering::Less);
            assert_eq!(
                cmp.compare(b"0123456789abcdefX", b"0123456789abcdefY"),
                Ordering::Less
            );
        }
    }

    #[test]
    fn identical_range_short_circuits() {
        let buf = [3u8, 1, 2];
        for cmp in BOTH {
            assert_eq!(cmp.compare(&buf[1..], &buf[1..]), Ordering::Equal);
            assert_eq!(
                cmp.compare_ranges(&buf, 0, 2, &buf, 1, 2).unwrap(),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn ranges_are_bounds_checked() {
        let cmp = Comparator::Portable;
        assert!(cmp.compare_ranges(&[1, 2], 1, 2, &[1], 0, 1).is_err());
        assert!(cmp.equals_ranges(&[1, 2], 0, 1, &[1], 0, 3).is_err());
        assert!(cmp.equals_ranges(&[9, 1, 2], 1, 2, &[1, 2], 0, 2).unwrap());
    }

    #[test]
    fn equals_matches_compare() {
        let cases: [(&[u8], &[u8]); 5] = [
            (b"", b""),
            (b"a", b"a"),
            (b"ab", b"ac"),
            (b"ab", b"bb"),
            (b"ab", b"abc"),
        ];
        for cmp in BOTH {
            for (a, b) in cases {
                assert_eq!(cmp.equals(a, b), cmp.compare(a, b) == Ordering::Equal);
            }
        }
    }

    #[test]
    fn prefix_checks() {
        for cmp in BOTH {
            assert!(cmp.starts_with(b"segment", b"seg"));
            assert!(cmp.starts_with(b"segment", b""));
            assert!(!cmp.starts_with(b"seg", b"segment"));
            assert!(!cmp.starts_with(b"segment", b"sex"));
        }
    }

    #[test]
    fn list_equality() {
        let a = vec![b"x".to_vec(), b"yz".to_vec()];
        let b: Vec<&[u8]> = vec![b"x", b"yz"];
        assert!(equals_all(&a, &b));
        assert!(!equals_all(&a, &b[..1]));
        assert!(!equals_all(&a, &[b"x".as_slice(), b"yy".as_slice()]));
    }
}
