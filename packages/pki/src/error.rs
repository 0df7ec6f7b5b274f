//! Error types for identity extraction and key decoding

use thiserror::Error;

/// Errors raised by the identity and public key pipeline
///
/// Every variant is a deterministic parse or policy failure; none is worth
/// retrying. Callers decide how each maps to a transport-level response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PkiError {
    /// The selected client-DN header carried zero or several values
    #[error("Multiple header entries found in request for the field: {0}")]
    MultipleHeaderValues(String),

    /// PEM framing is missing or invalid, or the body is not base64
    #[error("Malformed PEM: {0}")]
    MalformedPem(String),

    /// Certificate signing request structure is invalid or truncated
    #[error("Malformed certificate signing request: {0}")]
    MalformedCsr(String),

    /// SubjectPublicKeyInfo or PKCS#1 key structure is invalid
    #[error("Malformed public key: {0}")]
    MalformedPublicKey(String),

    /// Decoded key is not of the algorithm the caller asked for
    #[error("Unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    /// PEM block is of a different type than the operation requires
    #[error("Unexpected PEM label: expected {expected:?}, found {found:?}")]
    UnexpectedPemLabel {
        /// Label the operation accepts
        expected: String,
        /// Label found in the input
        found: String,
    },

    /// Self-signature of a certificate signing request does not verify
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Signature algorithm cannot be verified by this crate
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedSignatureAlgorithm(String),

    /// Key could not be re-encoded to its canonical form
    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),

    /// Extractor configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for the identity and public key pipeline
pub type Result<T> = std::result::Result<T, PkiError>;
