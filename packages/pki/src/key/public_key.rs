//! Algorithm-tagged public keys decoded from SubjectPublicKeyInfo
//!
//! The variant is fixed when the key is decoded and never reinterpreted.

use const_oid::db::rfc5912::{
    ID_EC_PUBLIC_KEY, SECP_224_R_1, SECP_256_R_1, SECP_384_R_1, SECP_521_R_1,
};
use const_oid::db::rfc8410::{ID_ED_25519, ID_X_25519};
use const_oid::ObjectIdentifier;
use der::{Decode, Encode};
use rsa::pkcs1::RsaPublicKey as Pkcs1RsaPublicKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use spki::SubjectPublicKeyInfoRef;
use tracing::debug;

use crate::error::{PkiError, Result};

/// `rsaEncryption` (PKCS #1)
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Largest accepted RSA modulus, in bits (`rsa` itself stops at 4096)
pub const MAX_RSA_MODULUS_BITS: usize = 16384;

/// Public key tagged by algorithm
///
/// Only the RSA variant carries parsed key material. Other recognised
/// algorithms keep their canonical SubjectPublicKeyInfo DER so they can still
/// be fingerprinted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// RSA modulus and public exponent
    Rsa(RsaPublicKey),
    /// Elliptic-curve key (`id-ecPublicKey`)
    Ec {
        /// Named curve, when the parameters name one
        curve: Option<ObjectIdentifier>,
        /// Canonical SubjectPublicKeyInfo DER
        spki_der: Vec<u8>,
    },
    /// Ed25519 signing key
    Ed25519 {
        /// Canonical SubjectPublicKeyInfo DER
        spki_der: Vec<u8>,
    },
    /// X25519 key-agreement key
    X25519 {
        /// Canonical SubjectPublicKeyInfo DER
        spki_der: Vec<u8>,
    },
    /// Any other algorithm
    Unknown {
        /// Algorithm OID from the SubjectPublicKeyInfo
        algorithm: ObjectIdentifier,
        /// Canonical SubjectPublicKeyInfo DER
        spki_der: Vec<u8>,
    },
}

impl PublicKey {
    /// Decode a DER SubjectPublicKeyInfo
    ///
    /// Unrecognised algorithms decode to [`PublicKey::Unknown`]; they are
    /// rejected later by the normalizer, not here.
    ///
    /// # Errors
    ///
    /// Returns `PkiError::MalformedPublicKey` when the structure does not parse
    /// or an RSA key body is invalid.
    pub fn from_spki_der(der: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoRef::from_der(der).map_err(|e| {
            debug!(error = %e, "SubjectPublicKeyInfo parsing failed");
            PkiError::MalformedPublicKey(format!("SubjectPublicKeyInfo parsing failed: {e}"))
        })?;
        let algorithm = spki.algorithm.oid;

        if algorithm == RSA_ENCRYPTION {
            if !spki.algorithm.parameters.is_some_and(|params| params.is_null()) {
                return Err(PkiError::MalformedPublicKey(
                    "RSA algorithm identifier must carry NULL parameters".to_string(),
                ));
            }
            let key_bytes = spki.subject_public_key.as_bytes().ok_or_else(|| {
                PkiError::MalformedPublicKey("RSA key bit string is not byte aligned".to_string())
            })?;
            return Self::from_pkcs1_der(key_bytes);
        }

        let spki_der = spki
            .to_der()
            .map_err(|e| PkiError::KeyEncoding(format!("Failed to encode public key: {e}")))?;

        let key = if algorithm == ID_EC_PUBLIC_KEY {
            let curve = spki
                .algorithm
                .parameters
                .and_then(|params| params.decode_as::<ObjectIdentifier>().ok());
            Self::Ec { curve, spki_der }
        } else if algorithm == ID_ED_25519 {
            Self::Ed25519 { spki_der }
        } else if algorithm == ID_X_25519 {
            Self::X25519 { spki_der }
        } else {
            Self::Unknown {
                algorithm,
                spki_der,
            }
        };
        debug!(algorithm = %key.algorithm_name(), "Decoded non-RSA public key");
        Ok(key)
    }

    /// Decode a DER PKCS#1 `RSAPublicKey`
    ///
    /// # Errors
    ///
    /// Returns `PkiError::MalformedPublicKey` when the structure does not parse.
    /// Moduli up to [`MAX_RSA_MODULUS_BITS`] are accepted.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let pkcs1 = Pkcs1RsaPublicKey::from_der(der)
            .map_err(|e| PkiError::MalformedPublicKey(format!("PKCS#1 parsing failed: {e}")))?;
        let n = BigUint::from_bytes_be(pkcs1.modulus.as_bytes());
        let e = BigUint::from_bytes_be(pkcs1.public_exponent.as_bytes());

        RsaPublicKey::new_with_max_size(n, e, MAX_RSA_MODULUS_BITS)
            .map(Self::Rsa)
            .map_err(|err| PkiError::MalformedPublicKey(format!("RSA public key rejected: {err}")))
    }

    /// Canonical SubjectPublicKeyInfo DER encoding
    ///
    /// This is the byte string key fingerprints are computed over.
    ///
    /// # Errors
    ///
    /// Returns `PkiError::KeyEncoding` if an RSA key cannot be encoded.
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        match self {
            Self::Rsa(key) => key
                .to_public_key_der()
                .map(|doc| doc.as_bytes().to_vec())
                .map_err(|e| PkiError::KeyEncoding(format!("Failed to encode RSA public key: {e}"))),
            Self::Ec { spki_der, .. }
            | Self::Ed25519 { spki_der }
            | Self::X25519 { spki_der }
            | Self::Unknown { spki_der, .. } => Ok(spki_der.clone()),
        }
    }

    /// Algorithm OID from the SubjectPublicKeyInfo
    #[must_use]
    pub fn algorithm_oid(&self) -> ObjectIdentifier {
        match self {
            Self::Rsa(_) => RSA_ENCRYPTION,
            Self::Ec { .. } => ID_EC_PUBLIC_KEY,
            Self::Ed25519 { .. } => ID_ED_25519,
            Self::X25519 { .. } => ID_X_25519,
            Self::Unknown { algorithm, .. } => *algorithm,
        }
    }

    /// Short algorithm name
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Self::Rsa(_) => "RSA",
            Self::Ec { .. } => "ECDSA",
            Self::Ed25519 { .. } => "Ed25519",
            Self::X25519 { .. } => "X25519",
            Self::Unknown { .. } => "Unknown",
        }
    }

    /// Key size in bits, when it can be determined
    #[must_use]
    pub fn key_size_bits(&self) -> Option<u32> {
        match self {
            Self::Rsa(key) => u32::try_from(key.n().bits()).ok(),
            Self::Ec { curve, .. } => {
                let curve = (*curve)?;
                if curve == SECP_224_R_1 {
                    Some(224)
                } else if curve == SECP_256_R_1 {
                    Some(256)
                } else if curve == SECP_384_R_1 {
                    Some(384)
                } else if curve == SECP_521_R_1 {
                    Some(521)
                } else {
                    None
                }
            }
            Self::Ed25519 { .. } | Self::X25519 { .. } => Some(256),
            Self::Unknown { .. } => None,
        }
    }

    /// True for the RSA variant
    #[must_use]
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa(_))
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.key_size_bits() {
            Some(bits) => write!(f, "{} ({bits} bits)", self.algorithm_name()),
            None => write!(f, "{} ({})", self.algorithm_name(), self.algorithm_oid()),
        }
    }
}
