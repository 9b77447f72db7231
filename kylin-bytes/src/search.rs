//! Unsigned binary search and naive subsequence search over byte arrays.

use std::ops::Range;

use kylin_result::{Error, Result};

use crate::codec::byte_range;

/// Binary search for `key` in `a[range]`, which must be sorted ascending as
/// unsigned bytes and free of duplicates.
///
/// Returns `Ok(index)` of the match, or `Err(insertion_point)` where `key`
/// would go to keep the range sorted. Both indices are into `a`, not into
/// the range. A reversed range, or one that runs past the end of `a`, is an
/// error.
pub fn unsigned_binary_search(
    a: &[u8],
    range: Range<usize>,
    key: u8,
) -> Result<std::result::Result<usize, usize>> {
    if range.start > range.end {
        return Err(Error::InvalidArgumentError(format!(
            "search range start ({}) is past its end ({})",
            range.start, range.end
        )));
    }
    let window = byte_range(a, range.start, range.end - range.start)?;
    let mut low = range.start;
    let mut high = range.end;
    while low < high {
        let mid = low + (high - low) / 2;
        let mid_val = window[mid - range.start];
        if mid_val < key {
            low = mid + 1;
        } else if mid_val > key {
            high = mid;
        } else {
            return Ok(Ok(mid));
        }
    }
    Ok(Err(low))
}

/// Legacy signed form of [`unsigned_binary_search`]: the match index, or
/// `-(insertion_point + 1)` when absent.
pub fn unsigned_binary_search_signed(a: &[u8], range: Range<usize>, key: u8) -> Result<isize> {
    Ok(match unsigned_binary_search(a, range, key)? {
        Ok(i) => i as isize,
        Err(i) => -(i as isize) - 1,
    })
}

/// First position of `target` in `array`.
#[inline]
pub fn index_of(array: &[u8], target: u8) -> Option<usize> {
    array.iter().position(|&b| b == target)
}

/// First position where `target` occurs as a contiguous run in `array`.
/// An empty `target` matches at 0.
pub fn index_of_slice(array: &[u8], target: &[u8]) -> Option<usize> {
    if target.is_empty() {
        return Some(0);
    }
    array.windows(target.len()).position(|w| w == target)
}

#[inline]
pub fn contains(array: &[u8], target: u8) -> bool {
    index_of(array, target).is_some()
}

#[inline]
pub fn contains_slice(array: &[u8], target: &[u8]) -> bool {
    index_of_slice(array, target).is_some()
}
