use lode_types::{FormatError, Kind};
use thiserror::Error;

/// Errors from canonical encoding and from parsing the textual canonical
/// form.
///
/// All of these are local, synchronous, and non-retryable: they report a
/// caller-contract violation (a value inconsistent with its declared kind, or
/// text that is not a well-formed tagged literal), never a transient
/// condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The declared kind disagrees with the value's actual shape.
    #[error("value shape is {actual}, but declared kind is {declared}")]
    KindMismatch { declared: Kind, actual: Kind },

    /// NaN compares unequal to itself, so it has no canonical encoding.
    #[error("NaN has no canonical encoding")]
    NanNumber,

    /// Two map entries whose keys encode to identical bytes.
    #[error("duplicate map key {0}")]
    DuplicateKey(String),

    /// A kind ordinal with no assigned kind.
    #[error("unknown kind ordinal {0}")]
    UnknownKind(u8),

    /// The text is not a well-formed tagged literal.
    #[error("malformed canonical form at byte {pos}: {reason}")]
    Malformed { pos: usize, reason: String },

    /// Well-formed tagged literal followed by extra input.
    #[error("unexpected trailing input at byte {0}")]
    TrailingInput(usize),

    /// A string literal with no closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An escape sequence the grammar does not define.
    #[error("invalid string escape {0:?}")]
    InvalidEscape(String),

    /// Malformed digest or hex payload inside a literal.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
