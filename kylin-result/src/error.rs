use std::{fmt, io};
use thiserror::Error;

/// Unified error type for codec, comparison and partitioning operations.
///
/// All variants except [`Error::Io`] belong to the argument-error family: the
/// caller passed a buffer, offset, length or value that cannot be honoured.
/// Nothing is retried internally and no operation leaves partial state behind,
/// so every error can be handled by fixing the input and calling again.
///
/// `Error` implements `Send` and `Sync`.
#[derive(Error, Debug)]
pub enum Error {
    /// A fixed-width decode was asked to read a length other than the type's width.
    ///
    /// Raised by the short/int/long/float/double decoders when the explicit
    /// `length` argument differs from 2/4/8 bytes, and by the boolean decoder
    /// unless exactly one byte is supplied.
    #[error("wrong length: {actual}, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// `offset + length` runs past the end of the source buffer.
    ///
    /// The capacity is the length of the whole backing buffer, not of the
    /// requested range.
    #[error(
        "offset ({offset}) + length ({length}) exceed the capacity of the array: {capacity}"
    )]
    OutOfBounds {
        offset: usize,
        length: usize,
        capacity: usize,
    },

    /// A put operation found fewer than the value's width bytes at `offset`.
    #[error("not enough room to put {kind} at offset {offset} in a {capacity} byte array")]
    InsufficientCapacity {
        kind: &'static str,
        offset: usize,
        capacity: usize,
    },

    /// Text is longer than the fixed-size field it is being written into.
    ///
    /// `printable` holds the escaped form of the offending bytes.
    #[error("trying to write {actual} bytes ({printable}) into a field of length {size}")]
    FieldOverflow {
        actual: usize,
        size: usize,
        printable: String,
    },

    /// Invalid API parameter not covered by a more specific size variant.
    ///
    /// Examples: a split request with zero splits or with `lower >= upper`,
    /// an increment on a value wider than 8 bytes, malformed hex text, or a
    /// decimal whose scale does not fit in 32 bits.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// I/O error while reading or writing a fixed-size field stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an [`Error::InvalidArgumentError`] from any displayable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kylin_result::Error;
    ///
    /// fn parse_width(input: &str) -> Result<u32, Error> {
    ///     input.parse::<u32>().map_err(Error::invalid_argument)
    /// }
    ///
    /// assert_eq!(parse_width("8").unwrap(), 8);
    /// assert!(matches!(parse_width("x"), Err(Error::InvalidArgumentError(_))));
    /// ```
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }

    /// Build the error for a fixed-width read, preferring the length complaint
    /// when both the length and the bounds are wrong.
    #[inline]
    pub fn wrong_length_or_offset(
        capacity: usize,
        offset: usize,
        length: usize,
        expected: usize,
    ) -> Self {
        if length != expected {
            Error::SizeMismatch {
                expected,
                actual: length,
            }
        } else {
            Error::OutOfBounds {
                offset,
                length,
                capacity,
            }
        }
    }

    /// Whether this error belongs to the argument-error family (bad sizes,
    /// offsets or values) rather than an underlying I/O failure.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}
