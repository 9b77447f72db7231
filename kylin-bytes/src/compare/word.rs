//! Word-at-a-time comparison.
//!
//! Each chunk is loaded in native byte order and converted to big-endian, so
//! an unsigned integer comparison of two words orders them exactly like the
//! byte-wise loop would.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

#[inline(always)]
fn load<const N: usize>(buf: &[u8], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[at..at + N]);
    out
}

pub(super) fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let min_len = a.len().min(b.len());
    let mut off = 0usize;

    while min_len - off >= 8 {
        let lw = u64::from_be(u64::from_ne_bytes(load(a, off)));
        let rw = u64::from_be(u64::from_ne_bytes(load(b, off)));
        if lw != rw {
            return lw.cmp(&rw);
        }
        off += 8;
    }

    if min_len - off >= 4 {
        let lw = u32::from_be(u32::from_ne_bytes(load(a, off)));
        let rw = u32::from_be(u32::from_ne_bytes(load(b, off)));
        if lw != rw {
            return lw.cmp(&rw);
        }
        off += 4;
    }

    if min_len - off >= 2 {
        let lw = u16::from_be(u16::from_ne_bytes(load(a, off)));
        let rw = u16::from_be(u16::from_ne_bytes(load(b, off)));
        if lw != rw {
            return lw.cmp(&rw);
        }
        off += 2;
    }

    if min_len - off == 1 && a[off] != b[off] {
        return a[off].cmp(&b[off]);
    }

    a.len().cmp(&b.len())
}
