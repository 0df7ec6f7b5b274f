//! Certificate signing request decoding
//!
//! Decoding checks structure only, plus that the signature algorithm fits the
//! subject key. The self-signature itself is checked on demand by
//! [`CertificateSigningRequest::verify_signature`].

mod name_extraction;
mod request;
pub mod signature;

pub use request::{csr_from_pem, decode_csr, CertificateSigningRequest};
pub use signature::SignatureFamily;
