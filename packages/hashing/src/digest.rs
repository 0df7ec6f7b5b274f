//! Digest value type with encoding support

use base64::{engine::general_purpose, Engine as _};
use subtle::ConstantTimeEq;

use crate::error::{HashError, Result};

/// Length of a SHA-256 digest in bytes
pub const DIGEST_LENGTH: usize = 32;

/// Fixed-length SHA-256 digest
///
/// The engine has no opinion on rendering: callers pick [`Digest::to_hex`] or
/// [`Digest::to_base64`]. Both render the same 32 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LENGTH],
}

impl Digest {
    /// Create a digest from raw bytes
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Get the digest as a standard (padded) base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(self.bytes)
    }

    /// Get the digest as a base64url string (URL-safe, unpadded)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Parse a digest from its hexadecimal rendering (either case)
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidEncoding` for non-hex input and
    /// `HashError::InvalidLength` when the input is not 32 bytes.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input).map_err(|e| HashError::InvalidEncoding(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Parse a digest from its standard base64 rendering
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidEncoding` for invalid base64 and
    /// `HashError::InvalidLength` when the input is not 32 bytes.
    pub fn from_base64(input: &str) -> Result<Self> {
        let bytes = general_purpose::STANDARD
            .decode(input)
            .map_err(|e| HashError::InvalidEncoding(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Compare against another digest in constant time
    ///
    /// Use this rather than `==` when checking a presented fingerprint against
    /// a trusted one.
    #[must_use]
    pub fn matches(&self, other: &Digest) -> bool {
        self.bytes[..].ct_eq(&other.bytes[..]).into()
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; DIGEST_LENGTH] =
            bytes.try_into().map_err(|_| HashError::InvalidLength {
                expected: DIGEST_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self::new(bytes))
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
