use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("key must contain at least one byte")]
    InvalidKey,
    #[error("unsupported cipher mode: {0}")]
    InvalidMode(String),
    #[error("unsupported padding: {0}")]
    InvalidPadding(String),
    #[error("unsupported return type: {0}")]
    InvalidReturnType(String),
    /// Carries the offending IV length in bytes.
    #[error("IV must be exactly 8 bytes, got {0}")]
    InvalidIv(usize),
    /// Carries the offending input length in bytes.
    #[error("input length {0} is not a multiple of 8")]
    InvalidInputLength(usize),
}
