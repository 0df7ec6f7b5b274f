//! Error handling for digest parsing

use thiserror::Error;

/// Hashing-specific errors
///
/// Computing a digest never fails; these only arise when a digest is parsed
/// back from one of its textual renderings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Text is not valid hex or base64
    #[error("Invalid digest encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded digest has the wrong number of bytes
    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Length actually decoded
        actual: usize,
    },
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
