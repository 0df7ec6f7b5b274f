//! # certid PKI
//!
//! Client identity extraction and public key fingerprinting.
//!
//! Two independent paths:
//!
//! - **Attributes**: proxy-injected client DN header → [`DnExtractor`] →
//!   [`parse_dn`] → [`DnAttributes`] (lowercased CN/OU).
//! - **Keys**: PEM → [`decode_pem`] → [`decode_csr`] or
//!   [`PublicKey::from_spki_der`] → [`to_rsa_public_key`], with
//!   [`fingerprint_public_key`] hashing the canonical SubjectPublicKeyInfo.
//!
//! ```rust,ignore
//! use certid_pki::{csr_from_pem, fingerprint_public_key, to_rsa_public_key};
//!
//! let csr = csr_from_pem(pem_bytes)?;
//! let fingerprint = fingerprint_public_key(csr.public_key())?;
//! let rsa_key = to_rsa_public_key(csr.into_public_key())?;
//! println!("{}", fingerprint.to_base64());
//! ```
//!
//! Every function is pure and synchronous and may be called from any thread.

#![forbid(unsafe_code)]

pub mod csr;
pub mod dn;
pub mod error;
pub mod fingerprint;
pub mod key;
pub mod pem;

pub use csr::{csr_from_pem, decode_csr, CertificateSigningRequest};
pub use dn::{
    extract_dn, parse_dn, parse_dn_with, DnAttributes, DnExtractor, DuplicateAttributePolicy,
    ExtractorConfig, HeaderMap, HeaderSource, DEFAULT_HEADER_NAMES,
};
pub use error::{PkiError, Result};
pub use fingerprint::{fingerprint_pem, fingerprint_public_key, fingerprint_rsa_public_key};
pub use key::{
    describe_rsa_public_key, pem_to_rsa_public_key, public_key_from_pem, to_rsa_public_key,
    PublicKey, RsaKeySummary,
};
pub use pem::{decode_pem, decode_pem_with_rest, encode_pem, PemBlock};

pub use certid_hashing::Digest;
pub use rsa::RsaPublicKey;
