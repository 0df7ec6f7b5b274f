//! SHA-256 fingerprint computation
//!
//! Provides the one-shot [`digest`] function and an incremental
//! [`Sha256Hasher`] for input that arrives in pieces.

use sha2::{Digest as _, Sha256};

use crate::digest::Digest;

/// Compute the SHA-256 digest of `data` exactly as given
///
/// Deterministic and infallible. Nothing is normalized: a PEM string and the
/// DER it armours hash differently, as do two DER encodings of one key.
/// Canonicalize the input before calling this.
#[must_use]
pub fn digest(data: impl AsRef<[u8]>) -> Digest {
    Digest::new(Sha256::digest(data.as_ref()).into())
}

/// Incremental SHA-256 hasher
///
/// Feeding the same bytes in any chunking yields the same digest as a
/// single call to [`digest`] over their concatenation.
#[derive(Clone, Default)]
pub struct Sha256Hasher {
    inner: Sha256,
    total_bytes: u64,
}

impl Sha256Hasher {
    /// Create a new hasher
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb another chunk of input
    pub fn update(&mut self, chunk: impl AsRef<[u8]>) -> &mut Self {
        let chunk = chunk.as_ref();
        self.inner.update(chunk);
        self.total_bytes += chunk.len() as u64;
        self
    }

    /// Get the total number of bytes processed so far
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Consume the hasher and produce the digest
    #[must_use]
    pub fn finalize(self) -> Digest {
        Digest::new(self.inner.finalize().into())
    }
}

impl std::fmt::Debug for Sha256Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256Hasher")
            .field("total_bytes", &self.total_bytes)
            .finish_non_exhaustive()
    }
}
