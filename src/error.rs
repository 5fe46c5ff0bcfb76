//! Crate-wide error type.
//!
//! Every fallible operation in this crate funnels into one of these four
//! variants; see the module docs of `alignment`, `scores` and `alphabets`
//! for which operations can raise which variant.

use thiserror::Error;

/// Errors raised by the alignment core and its collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two operands that are required to have equal (or some fixed) length
    /// did not.
    #[error("length mismatch: {reason}")]
    LengthMismatch {
        /// Human-readable detail, e.g. "x has 11 symbols, y has 8".
        reason: String,
    },

    /// A byte fell outside the alphabet of a matrix or rank transform.
    #[error("unknown symbol: byte 0x{0:02x}")]
    UnknownSymbol(u8),

    /// An operand that must contain at least one element was empty.
    #[error("empty argument: {reason}")]
    EmptyArgument {
        /// Human-readable detail, e.g. "start codon set must be non-empty".
        reason: String,
    },

    /// A collaborator was constructed with an internally inconsistent
    /// configuration (e.g. start/stop codon sets of differing lengths).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable detail.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
