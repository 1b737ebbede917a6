use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width field was given a slice of the wrong length.
    #[error("uint{bits} must have exactly {expected} bytes")]
    LengthMismatch { bits: u16, expected: usize },

    /// A frame or field ended before all of its bytes were read.
    #[error("insufficient data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
