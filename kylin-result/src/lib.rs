//! Error types and result definitions for the Kylin byte libraries.
//!
//! Every fallible operation in the workspace returns [`Result<T>`], whose error
//! variant is the single [`Error`] enum defined here.
//!
//! # Error Philosophy
//!
//! Two postures are applied consistently:
//!
//! - **Bounds and format violations** (wrong fixed width, offset + length past
//!   the end of a buffer, a string too long for its fixed field, malformed hex)
//!   fail immediately with an [`Error`] that carries the expected and actual
//!   sizes, so the caller can log a precise diagnosis.
//! - **Infeasible but well-formed requests** (splitting a key interval into
//!   more pieces than it has distinct values, decoding a decimal from a buffer
//!   that is too short) are not errors. Those operations return `Option::None`
//!   and the caller treats it as "not applicable".
//!
//! # Error Categories
//!
//! - **Size errors** ([`Error::SizeMismatch`], [`Error::OutOfBounds`],
//!   [`Error::InsufficientCapacity`], [`Error::FieldOverflow`])
//! - **User input errors** ([`Error::InvalidArgumentError`])
//! - **I/O errors** ([`Error::Io`]): fixed-size field streams

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
