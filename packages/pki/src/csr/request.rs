//! PKCS #10 certificate signing request decoding

use const_oid::ObjectIdentifier;
use der::{Decode, Encode, Header, Reader, SliceReader};
use tracing::{debug, warn};
use x509_cert::name::Name;
use x509_cert::request::CertReq;

use super::name_extraction::extract_subject_attributes;
use super::signature::{check_algorithm_consistency, verify_rsa_pkcs1v15};
use crate::dn::DnAttributes;
use crate::error::{PkiError, Result};
use crate::key::PublicKey;
use crate::pem::{decode_pem, CERTIFICATE_REQUEST_LABEL};

/// Decoded certificate signing request
///
/// The embedded subject key is decoded once and kept algorithm-tagged. Other
/// fields are reachable through [`CertificateSigningRequest::inner`].
#[derive(Clone, Debug)]
pub struct CertificateSigningRequest {
    request: CertReq,
    der: Vec<u8>,
    info_der: Vec<u8>,
    public_key: PublicKey,
}

impl CertificateSigningRequest {
    /// Subject public key, not yet normalized
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Consume the request, returning its subject public key
    #[must_use]
    pub fn into_public_key(self) -> PublicKey {
        self.public_key
    }

    /// Subject name
    #[must_use]
    pub fn subject_name(&self) -> &Name {
        &self.request.info.subject
    }

    /// Subject name as an RFC 4514 string
    #[must_use]
    pub fn subject(&self) -> String {
        self.request.info.subject.to_string()
    }

    /// Lowercased CN/OU of the subject; a repeated attribute keeps its last value
    #[must_use]
    pub fn subject_attributes(&self) -> DnAttributes {
        extract_subject_attributes(&self.request.info.subject)
    }

    /// Algorithm the request was signed with
    #[must_use]
    pub fn signature_algorithm(&self) -> ObjectIdentifier {
        self.request.algorithm.oid
    }

    /// Raw signature bytes, `None` if the bit string is not byte aligned
    #[must_use]
    pub fn signature(&self) -> Option<&[u8]> {
        self.request.signature.as_bytes()
    }

    /// DER encoding the request was decoded from
    #[must_use]
    pub fn to_der(&self) -> Vec<u8> {
        self.der.clone()
    }

    /// Underlying ASN.1 structure
    #[must_use]
    pub fn inner(&self) -> &CertReq {
        &self.request
    }

    /// Verify the request's self-signature against its own subject key
    ///
    /// Supports `sha{256,384,512}WithRSAEncryption`.
    ///
    /// # Errors
    ///
    /// - `PkiError::UnsupportedSignatureAlgorithm` for any other algorithm
    /// - `PkiError::InvalidSignature` when the signature does not verify
    pub fn verify_signature(&self) -> Result<()> {
        let algorithm = self.signature_algorithm();
        let PublicKey::Rsa(key) = &self.public_key else {
            return Err(PkiError::UnsupportedSignatureAlgorithm(algorithm.to_string()));
        };
        let signature = self.signature().ok_or_else(|| {
            PkiError::InvalidSignature("signature bit string is not byte aligned".to_string())
        })?;

        verify_rsa_pkcs1v15(key, &algorithm, &self.info_der, signature).inspect_err(|e| {
            if matches!(e, PkiError::InvalidSignature(_)) {
                warn!(subject = %self.subject(), "Certificate request self-signature rejected");
            }
        })
    }
}

/// Decode a DER certificate signing request
///
/// # Errors
///
/// Returns `PkiError::MalformedCsr` when the structure is invalid, truncated,
/// followed by trailing bytes, carries an unparseable subject key, or is
/// signed with an algorithm its subject key cannot produce.
pub fn decode_csr(der: &[u8]) -> Result<CertificateSigningRequest> {
    let request =
        CertReq::from_der(der).map_err(|e| malformed(format!("PKCS#10 parsing failed: {e}")))?;
    let info_der = request_info_bytes(der)?;

    let spki_der = request
        .info
        .public_key
        .to_der()
        .map_err(|e| malformed(format!("Failed to encode subject public key: {e}")))?;
    let public_key = PublicKey::from_spki_der(&spki_der)
        .map_err(|e| malformed(format!("subject public key: {e}")))?;

    check_algorithm_consistency(&request.algorithm.oid, &public_key).inspect_err(|e| {
        debug!(error = %e, "Certificate request algorithm check failed");
    })?;

    debug!(
        key = %public_key,
        signature_algorithm = %request.algorithm.oid,
        "Decoded certificate request"
    );
    Ok(CertificateSigningRequest {
        request,
        der: der.to_vec(),
        info_der,
        public_key,
    })
}

/// Decode a `CERTIFICATE REQUEST` PEM block
///
/// # Errors
///
/// - `PkiError::MalformedPem` when the armour is broken
/// - `PkiError::UnexpectedPemLabel` for any other block type
/// - any error of [`decode_csr`]
pub fn csr_from_pem(pem: &[u8]) -> Result<CertificateSigningRequest> {
    let block = decode_pem(pem)?;
    block.require_label(CERTIFICATE_REQUEST_LABEL)?;
    decode_csr(block.bytes())
}

fn malformed(reason: String) -> PkiError {
    debug!(reason = %reason, "CSR decoding failed");
    PkiError::MalformedCsr(reason)
}

/// The signed `CertificationRequestInfo` exactly as encoded
fn request_info_bytes(der: &[u8]) -> Result<Vec<u8>> {
    let read = || -> der::Result<Vec<u8>> {
        let mut reader = SliceReader::new(der)?;
        // outer CertificationRequest SEQUENCE header
        Header::decode(&mut reader)?;
        let header = reader.peek_header()?;
        let total_len = (header.encoded_len()? + header.length)?;
        Ok(reader.read_slice(total_len)?.to_vec())
    };
    read().map_err(|e| malformed(format!("CertificationRequestInfo extraction failed: {e}")))
}
