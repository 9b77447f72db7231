//! Partitioning of a key interval into approximately equal sub-ranges.
//!
//! Both bounds are zero-padded on the right to a common width `w` and read as
//! unsigned big-endian integers. The `n` interior boundaries are spaced
//! `(upper - lower [+ 1]) / (n + 1)` apart and rendered back at width `w`,
//! which makes them usable as scan-range endpoints for parallel workers.

use std::iter::FusedIterator;

use kylin_result::{Error, Result};
use num_bigint::BigUint;
use tracing::trace;

use crate::compare::Comparator;
use crate::ops::pad_tail;

/// The `n + 2` boundaries of a split key interval.
///
/// Index 0 is the original lower bound and index `n + 1` the original upper
/// bound, both exactly as passed in (unpadded). The value can be iterated any
/// number of times.
#[derive(Debug, Clone)]
pub struct KeySplits {
    lower: Vec<u8>,
    upper: Vec<u8>,
    start: BigUint,
    interval: BigUint,
    width: usize,
    num_splits: usize,
}

impl KeySplits {
    /// Number of interior split points.
    #[inline]
    pub fn num_splits(&self) -> usize {
        self.num_splits
    }

    /// Total number of boundaries, `num_splits + 2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_splits + 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distance between consecutive interior boundaries.
    #[inline]
    pub fn interval(&self) -> &BigUint {
        &self.interval
    }

    /// Boundary `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<Vec<u8>> {
        if i == 0 {
            Some(self.lower.clone())
        } else if i == self.num_splits + 1 {
            Some(self.upper.clone())
        } else if i <= self.num_splits {
            let cur = &self.start + &self.interval * BigUint::from(i);
            Some(to_fixed_width(&cur, self.width))
        } else {
            None
        }
    }

    pub fn iter(&self) -> SplitIter<'_> {
        SplitIter {
            splits: self,
            next: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<Vec<u8>> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a KeySplits {
    type Item = Vec<u8>;
    type IntoIter = SplitIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over the boundaries of a [`KeySplits`].
#[derive(Debug, Clone)]
pub struct SplitIter<'a> {
    splits: &'a KeySplits,
    next: usize,
}

impl Iterator for SplitIter<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let item = self.splits.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.splits.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SplitIter<'_> {}

impl FusedIterator for SplitIter<'_> {}

/// Render `v` big-endian, left-padded with zeros to `width` bytes.
fn to_fixed_width(v: &BigUint, width: usize) -> Vec<u8> {
    let digits = v.to_bytes_be();
    let mut out = vec![0u8; width.saturating_sub(digits.len())];
    out.extend_from_slice(&digits[digits.len().saturating_sub(width)..]);
    out
}

/// Prepare the boundaries of `[lower, upper)` (or `[lower, upper]` when
/// `inclusive`) cut into `num_splits + 1` pieces.
///
/// Returns `Ok(None)` when the interval holds fewer distinct values than
/// pieces requested. Fails when `num_splits == 0` or when `lower >= upper`
/// once both are zero-padded to the same width.
pub fn iterate_on_splits(
    lower: &[u8],
    upper: &[u8],
    inclusive: bool,
    num_splits: usize,
) -> Result<Option<KeySplits>> {
    let width = lower.len().max(upper.len());
    let lower_padded = pad_tail(lower, width - lower.len());
    let upper_padded = pad_tail(upper, width - upper.len());

    if Comparator::global().compare(&lower_padded, &upper_padded).is_ge() {
        return Err(Error::InvalidArgumentError(
            "upper bound must be greater than lower bound".into(),
        ));
    }
    if num_splits == 0 {
        return Err(Error::InvalidArgumentError(
            "number of splits must be greater than 0".into(),
        ));
    }

    let start = BigUint::from_bytes_be(&lower_padded);
    let stop = BigUint::from_bytes_be(&upper_padded);
    let mut diff = &stop - &start;
    if inclusive {
        diff += 1u32;
    }
    let pieces = BigUint::from(num_splits) + 1u32;
    if diff < pieces {
        trace!(width, num_splits, %diff, "key interval too narrow to split");
        return Ok(None);
    }
    let interval = diff / &pieces;
    trace!(width, num_splits, %interval, "key interval split");

    Ok(Some(KeySplits {
        lower: lower.to_vec(),
        upper: upper.to_vec(),
        start,
        interval,
        width,
        num_splits,
    }))
}

/// [`iterate_on_splits`] collected into `num_splits + 2` boundaries.
pub fn split(
    lower: &[u8],
    upper: &[u8],
    inclusive: bool,
    num_splits: usize,
) -> Result<Option<Vec<Vec<u8>>>> {
    Ok(iterate_on_splits(lower, upper, inclusive, num_splits)?.map(|s| s.to_vec()))
}
