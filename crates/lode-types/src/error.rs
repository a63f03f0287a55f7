use thiserror::Error;

/// Errors from constructing a reference out of malformed input.
///
/// These indicate a programming-contract violation by the caller, not a
/// transient condition; nothing here is retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
