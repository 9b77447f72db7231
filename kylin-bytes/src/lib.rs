//! Byte-level codecs and ordering primitives for storage keys.
//!
//! Typed values are turned into byte sequences ([`codec`]), ordered by an
//! unsigned lexicographic comparator ([`compare`]), hashed and searched
//! ([`hash`], [`search`]), stepped to adjacent keys ([`arith`]) and cut into
//! ranges for parallel scans ([`split`]).
//!
//! ## A Note on Endianness and Sort Order
//!
//! Every numeric layout is **big-endian**, so the storage engine can order
//! keys with one type-agnostic rule: compare bytes as unsigned values, first
//! difference wins, shorter sequence first on a tie. Big-endian makes that
//! byte order agree with numeric order for non-negative integers.
//!
//! Integers are plain two's complement. Negative values therefore sort
//! *after* non-negative ones (`FF..` > `00..`). Persisted data already relies
//! on this layout, so it is a documented limitation rather than something to
//! correct here.
//!
//! ## Comparator selection
//!
//! Exactly one [`Comparator`] strategy is active per process. Install it at
//! startup with [`Comparator::init`], or let the first comparison pick the
//! best available one.
//!
//! ```
//! use std::cmp::Ordering;
//! use kylin_bytes::{Comparator, BeI64, FixedWidthCodec};
//!
//! let cmp = Comparator::global();
//! let a = BeI64::to_bytes(7);
//! let b = BeI64::to_bytes(300);
//! assert_eq!(cmp.compare(&a, &b), Ordering::Less);
//! ```

pub mod arith;
pub mod codec;
pub mod compare;
pub mod hash;
pub mod ops;
pub mod search;
pub mod split;
pub mod text;
pub mod value;

pub use arith::{increment_by, successor};
pub use codec::{
    BeF32, BeF64, BeI16, BeI32, BeI64, Bool, Decimal, EncodeInto, FixedWidthCodec, Utf8,
    byte_range, read_as_int, read_string_fixed_size, write_string_fixed_size,
};
pub use compare::{
    Comparator, compare_to, compare_to_range, equals, equals_all, equals_range, starts_with,
};
pub use hash::{ByteKey, hash_bytes, hash_range, map_key};
pub use search::{
    contains, contains_slice, index_of, index_of_slice, unsigned_binary_search,
    unsigned_binary_search_signed,
};
pub use split::{KeySplits, SplitIter, iterate_on_splits, split};
pub use text::{from_hex, to_bytes_binary, to_hex, to_string_binary, to_string_binary_range};
pub use value::{DataType, Value, decode_value, encode_value, encode_value_to_vec};

pub use kylin_result::{Error, Result};

pub const SIZEOF_BOOLEAN: usize = 1;
pub const SIZEOF_BYTE: usize = SIZEOF_BOOLEAN;
pub const SIZEOF_CHAR: usize = 2;
pub const SIZEOF_SHORT: usize = 2;
pub const SIZEOF_INT: usize = 4;
pub const SIZEOF_FLOAT: usize = 4;
pub const SIZEOF_LONG: usize = 8;
pub const SIZEOF_DOUBLE: usize = 8;

/// Length of an optional byte array, 0 when absent.
#[inline]
pub fn len(bytes: Option<&[u8]>) -> usize {
    bytes.map_or(0, <[u8]>::len)
}
