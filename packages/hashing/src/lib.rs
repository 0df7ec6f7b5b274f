//! SHA-256 fingerprint engine
//!
//! [`digest`] hashes its input exactly as given. It performs no
//! canonicalization of any kind.
//!
//! **Callers must canonicalize before hashing.** Two different encodings of
//! the same logical key (PEM versus DER, PKCS#1 versus SubjectPublicKeyInfo,
//! DER with a different length form) produce different digests. Re-marshal a
//! decoded key into its canonical DER form first; `certid_pki` does this for
//! public keys.

#![forbid(unsafe_code)]

pub mod digest;
pub mod error;
pub mod sha256;

pub use digest::{Digest, DIGEST_LENGTH};
pub use error::{HashError, Result};
pub use sha256::{digest, Sha256Hasher};
