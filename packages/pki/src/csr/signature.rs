//! Signature algorithm identification and CSR self-signature checks

use const_oid::db::rfc5912::ID_EC_PUBLIC_KEY;
use const_oid::db::rfc8410::{ID_ED_25519, ID_ED_448, ID_X_25519, ID_X_448};
use const_oid::ObjectIdentifier;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{PkiError, Result};
use crate::key::{PublicKey, RSA_ENCRYPTION};

// PKCS #1 / RFC 8017
const SHA1_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.5");
const RSASSA_PSS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");
/// `sha256WithRSAEncryption`
pub const SHA256_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");
/// `sha384WithRSAEncryption`
pub const SHA384_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");
/// `sha512WithRSAEncryption`
pub const SHA512_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");
const SHA224_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.14");

// ANSI X9.62 / RFC 5758
const ECDSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.1");
const ECDSA_WITH_SHA224: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.1");
const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");
const ECDSA_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");
const ECDSA_WITH_SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.4");

/// Key family a signature algorithm or public key belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureFamily {
    /// RSA (PKCS #1 v1.5 or PSS)
    Rsa,
    /// ECDSA over a named curve
    Ecdsa,
    /// Ed25519
    Ed25519,
    /// Ed448
    Ed448,
    /// Key-agreement only key (X25519/X448), cannot sign
    KeyAgreement,
}

impl SignatureFamily {
    /// Family of a signature algorithm OID
    #[must_use]
    pub fn of_signature_algorithm(oid: &ObjectIdentifier) -> Option<Self> {
        let rsa = [
            SHA1_WITH_RSA,
            RSASSA_PSS,
            SHA224_WITH_RSA,
            SHA256_WITH_RSA,
            SHA384_WITH_RSA,
            SHA512_WITH_RSA,
        ];
        let ecdsa = [
            ECDSA_WITH_SHA1,
            ECDSA_WITH_SHA224,
            ECDSA_WITH_SHA256,
            ECDSA_WITH_SHA384,
            ECDSA_WITH_SHA512,
        ];

        if rsa.contains(oid) {
            Some(Self::Rsa)
        } else if ecdsa.contains(oid) {
            Some(Self::Ecdsa)
        } else if *oid == ID_ED_25519 {
            Some(Self::Ed25519)
        } else if *oid == ID_ED_448 {
            Some(Self::Ed448)
        } else {
            None
        }
    }

    /// Family of a subject public key
    #[must_use]
    pub fn of_public_key(key: &PublicKey) -> Option<Self> {
        let oid = key.algorithm_oid();
        if oid == RSA_ENCRYPTION {
            Some(Self::Rsa)
        } else if oid == ID_EC_PUBLIC_KEY {
            Some(Self::Ecdsa)
        } else if oid == ID_ED_25519 {
            Some(Self::Ed25519)
        } else if oid == ID_ED_448 {
            Some(Self::Ed448)
        } else if oid == ID_X_25519 || oid == ID_X_448 {
            Some(Self::KeyAgreement)
        } else {
            None
        }
    }
}

/// Reject a request whose signature algorithm cannot have been produced by its key
///
/// Unknown algorithms on either side are let through; only a provable
/// mismatch fails.
pub(crate) fn check_algorithm_consistency(
    signature_algorithm: &ObjectIdentifier,
    key: &PublicKey,
) -> Result<()> {
    let key_family = SignatureFamily::of_public_key(key);
    let signature_family = SignatureFamily::of_signature_algorithm(signature_algorithm);

    match (key_family, signature_family) {
        (Some(SignatureFamily::KeyAgreement), _) => Err(PkiError::MalformedCsr(format!(
            "{} key cannot sign a certificate request",
            key.algorithm_name()
        ))),
        (Some(key_family), Some(signature_family)) if key_family != signature_family => {
            Err(PkiError::MalformedCsr(format!(
                "signature algorithm {signature_algorithm} does not match {} subject key",
                key.algorithm_name()
            )))
        }
        _ => Ok(()),
    }
}

/// Verify an RSA PKCS #1 v1.5 signature over `message`
pub(crate) fn verify_rsa_pkcs1v15(
    key: &RsaPublicKey,
    signature_algorithm: &ObjectIdentifier,
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    let signature = Signature::try_from(signature)
        .map_err(|e| PkiError::InvalidSignature(format!("malformed RSA signature: {e}")))?;
    let key = key.clone();

    let verified = if *signature_algorithm == SHA256_WITH_RSA {
        VerifyingKey::<Sha256>::new(key).verify(message, &signature)
    } else if *signature_algorithm == SHA384_WITH_RSA {
        VerifyingKey::<Sha384>::new(key).verify(message, &signature)
    } else if *signature_algorithm == SHA512_WITH_RSA {
        VerifyingKey::<Sha512>::new(key).verify(message, &signature)
    } else {
        return Err(PkiError::UnsupportedSignatureAlgorithm(
            signature_algorithm.to_string(),
        ));
    };

    verified.map_err(|e| PkiError::InvalidSignature(format!("RSA signature check failed: {e}")))
}
