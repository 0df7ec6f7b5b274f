//! Coercion of decoded keys into the RSA representation

use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::public_key::PublicKey;
use crate::error::{PkiError, Result};
use crate::pem::{decode_pem, PUBLIC_KEY_LABEL, RSA_PUBLIC_KEY_LABEL};

/// Return the RSA key carried by `key`
///
/// # Errors
///
/// Returns `PkiError::UnsupportedKeyAlgorithm` for every non-RSA variant.
pub fn to_rsa_public_key(key: PublicKey) -> Result<RsaPublicKey> {
    match key {
        PublicKey::Rsa(rsa) => Ok(rsa),
        other => {
            debug!(
                algorithm = %other.algorithm_name(),
                oid = %other.algorithm_oid(),
                "Rejecting non-RSA public key"
            );
            Err(PkiError::UnsupportedKeyAlgorithm(format!(
                "{} ({})",
                other.algorithm_name(),
                other.algorithm_oid()
            )))
        }
    }
}

/// Decode a `PUBLIC KEY` (or PKCS#1 `RSA PUBLIC KEY`) PEM block
///
/// # Errors
///
/// - `PkiError::MalformedPem` when the armour is broken
/// - `PkiError::UnexpectedPemLabel` for any other block type
/// - `PkiError::MalformedPublicKey` when the key structure does not parse
pub fn public_key_from_pem(pem: &[u8]) -> Result<PublicKey> {
    let block = decode_pem(pem)?;
    match block.label() {
        PUBLIC_KEY_LABEL => PublicKey::from_spki_der(block.bytes()),
        RSA_PUBLIC_KEY_LABEL => PublicKey::from_pkcs1_der(block.bytes()),
        other => Err(PkiError::UnexpectedPemLabel {
            expected: PUBLIC_KEY_LABEL.to_string(),
            found: other.to_string(),
        }),
    }
}

/// Decode a public key PEM block straight into an RSA key
///
/// # Errors
///
/// Any error of [`public_key_from_pem`], or `PkiError::UnsupportedKeyAlgorithm`
/// when the key is not RSA.
pub fn pem_to_rsa_public_key(pem: &[u8]) -> Result<RsaPublicKey> {
    public_key_from_pem(pem).and_then(to_rsa_public_key)
}

/// Printable view of an RSA public key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeySummary {
    /// Modulus as uppercase hex, no leading zeros
    pub modulus_hex: String,
    /// Public exponent
    pub exponent: u64,
    /// Modulus length in bits
    pub bits: usize,
}

impl std::fmt::Display for RsaKeySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RSA {} bits, e={}, n={}",
            self.bits, self.exponent, self.modulus_hex
        )
    }
}

/// Summarise an RSA key for diagnostics
#[must_use]
pub fn describe_rsa_public_key(key: &RsaPublicKey) -> RsaKeySummary {
    let exponent = key
        .e()
        .to_bytes_be()
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    RsaKeySummary {
        modulus_hex: key.n().to_str_radix(16).to_uppercase(),
        exponent,
        bits: key.n().bits(),
    }
}
