//! Public key fingerprints
//!
//! A fingerprint is the SHA-256 of the key's canonical SubjectPublicKeyInfo
//! DER. Keys are always re-encoded before hashing, so a standalone key and
//! the CSR carrying it yield the same fingerprint.

use certid_hashing::{digest, Digest};
use rsa::RsaPublicKey;

use crate::csr::decode_csr;
use crate::error::{PkiError, Result};
use crate::key::PublicKey;
use crate::pem::{decode_pem, CERTIFICATE_REQUEST_LABEL, PUBLIC_KEY_LABEL, RSA_PUBLIC_KEY_LABEL};

/// Fingerprint a decoded public key of any algorithm
///
/// # Errors
///
/// Returns `PkiError::KeyEncoding` when the key cannot be re-encoded.
pub fn fingerprint_public_key(key: &PublicKey) -> Result<Digest> {
    key.to_spki_der().map(|der| digest(&der))
}

/// Fingerprint an RSA public key
///
/// # Errors
///
/// Returns `PkiError::KeyEncoding` when the key cannot be re-encoded.
pub fn fingerprint_rsa_public_key(key: &RsaPublicKey) -> Result<Digest> {
    fingerprint_public_key(&PublicKey::Rsa(key.clone()))
}

/// Fingerprint the key in a `PUBLIC KEY`, `RSA PUBLIC KEY` or
/// `CERTIFICATE REQUEST` PEM block
///
/// # Errors
///
/// Any decoding error for the block type, or `PkiError::UnexpectedPemLabel`
/// for other labels.
pub fn fingerprint_pem(pem: &[u8]) -> Result<Digest> {
    let block = decode_pem(pem)?;
    let key = match block.label() {
        PUBLIC_KEY_LABEL => PublicKey::from_spki_der(block.bytes())?,
        RSA_PUBLIC_KEY_LABEL => PublicKey::from_pkcs1_der(block.bytes())?,
        CERTIFICATE_REQUEST_LABEL => decode_csr(block.bytes())?.into_public_key(),
        other => {
            return Err(PkiError::UnexpectedPemLabel {
                expected: format!("{PUBLIC_KEY_LABEL} or {CERTIFICATE_REQUEST_LABEL}"),
                found: other.to_string(),
            })
        }
    };
    fingerprint_public_key(&key)
}
