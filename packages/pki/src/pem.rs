//! PEM armour decoding
//!
//! Framing follows the classic RFC 7468 reading: the `-----BEGIN <label>-----`
//! line must start the input or a line, and the matching
//! `-----END <label>-----` line must start a line. Once the block is located
//! it is handed to the `pem` crate, which ignores whitespace inside the
//! base64 body. Encapsulated headers (`Proc-Type:` and friends) are rejected.

use pem::{EncodeConfig, LineEnding, Pem, PemError};
use tracing::debug;

use crate::error::{PkiError, Result};

/// Label of a SubjectPublicKeyInfo block
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
/// Label of a PKCS#1 RSA public key block
pub const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";
/// Label of a PKCS#10 certificate signing request block
pub const CERTIFICATE_REQUEST_LABEL: &str = "CERTIFICATE REQUEST";

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const END_MARKER: &[u8] = b"-----END ";
const LINE_END_MARKER: &[u8] = b"-----";

/// Decoded payload of one PEM section
#[derive(Clone, PartialEq, Eq)]
pub struct PemBlock {
    label: String,
    bytes: Vec<u8>,
}

impl PemBlock {
    /// Create a block from a label and binary payload
    #[must_use]
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }

    /// Block label, e.g. `PUBLIC KEY`
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Decoded binary payload (usually DER)
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the block, returning the payload
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// True for a `PUBLIC KEY` block
    #[must_use]
    pub fn is_public_key(&self) -> bool {
        self.label == PUBLIC_KEY_LABEL
    }

    /// True for a `CERTIFICATE REQUEST` block
    #[must_use]
    pub fn is_certificate_request(&self) -> bool {
        self.label == CERTIFICATE_REQUEST_LABEL
    }

    /// Require a specific label
    ///
    /// # Errors
    ///
    /// Returns `PkiError::UnexpectedPemLabel` when the label differs.
    pub fn require_label(&self, expected: &str) -> Result<()> {
        if self.label == expected {
            Ok(())
        } else {
            Err(PkiError::UnexpectedPemLabel {
                expected: expected.to_string(),
                found: self.label.clone(),
            })
        }
    }

    /// Re-armour the block as PEM text
    #[must_use]
    pub fn to_pem(&self) -> String {
        encode_pem(&self.label, &self.bytes)
    }
}

impl std::fmt::Debug for PemBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemBlock")
            .field("label", &self.label)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Decode the first PEM block in `input`
///
/// Text before the BEGIN line and anything after the END line is ignored.
///
/// # Errors
///
/// Returns `PkiError::MalformedPem` when no BEGIN line is found, the END line
/// is missing or carries a different label, or the body is not valid base64.
pub fn decode_pem(input: &[u8]) -> Result<PemBlock> {
    decode_pem_with_rest(input).map(|(block, _)| block)
}

/// Decode the first PEM block and return the input following its END line
///
/// # Errors
///
/// Same as [`decode_pem`].
pub fn decode_pem_with_rest(input: &[u8]) -> Result<(PemBlock, &[u8])> {
    let start = find_begin(input).ok_or_else(|| malformed("no -----BEGIN line found"))?;

    let (type_line, body) = split_line(&input[start + BEGIN_MARKER.len()..]);
    let label = type_line
        .strip_suffix(LINE_END_MARKER)
        .ok_or_else(|| malformed("BEGIN line is not terminated by -----"))?;
    let label = std::str::from_utf8(label).map_err(|_| malformed("label is not valid UTF-8"))?;
    if label.is_empty() {
        return Err(malformed("empty label"));
    }

    let (encoded, footer) =
        find_end(body).ok_or_else(|| malformed(format!("no -----END line for {label}")))?;
    // base64 never contains '-'
    if encoded.contains(&b'-') {
        return Err(malformed(format!("stray marker inside the {label} body")));
    }
    let (end_line, rest) = split_line(&footer[END_MARKER.len()..]);
    if !end_line.ends_with(LINE_END_MARKER) {
        return Err(malformed("END line is not terminated by -----"));
    }

    let block = &input[start..input.len() - rest.len()];
    let parsed = pem::parse(block).map_err(pem_error)?;
    if parsed.headers().iter().next().is_some() {
        return Err(malformed(format!("{label} block carries encapsulated headers")));
    }

    Ok((PemBlock::new(label, parsed.into_contents()), rest))
}

/// Armour `bytes` as PEM with 64-column base64 lines and LF line endings
#[must_use]
pub fn encode_pem(label: &str, bytes: &[u8]) -> String {
    pem::encode_config(
        &Pem::new(label, bytes),
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    )
}

fn malformed(reason: impl Into<String>) -> PkiError {
    let reason = reason.into();
    debug!(reason = %reason, "PEM decoding failed");
    PkiError::MalformedPem(reason)
}

fn pem_error(err: PemError) -> PkiError {
    match err {
        PemError::MismatchedTags(begin, end) => malformed(format!(
            "END label {end:?} does not match BEGIN label {begin:?}"
        )),
        PemError::MalformedFraming => malformed("BEGIN/END framing is malformed"),
        PemError::InvalidData(e) => malformed(format!("invalid base64 body: {e}")),
        PemError::InvalidHeader(_) => malformed("blank line inside the base64 body"),
        other => malformed(other.to_string()),
    }
}

/// Offset of the first BEGIN marker at the start of the input or of a line
fn find_begin(input: &[u8]) -> Option<usize> {
    (0..input.len()).find(|&i| {
        input[i..].starts_with(BEGIN_MARKER) && (i == 0 || input[i - 1] == b'\n')
    })
}

/// Split `body` at the END marker that starts a line
///
/// Returns the encoded text before the END line and the slice starting at
/// the marker.
fn find_end(body: &[u8]) -> Option<(&[u8], &[u8])> {
    if body.starts_with(END_MARKER) {
        return Some((&body[..0], body));
    }
    (1..body.len())
        .find(|&i| body[i - 1] == b'\n' && body[i..].starts_with(END_MARKER))
        .map(|i| body.split_at(i))
}

/// Split off one line, trimming trailing spaces, tabs and CR
fn split_line(input: &[u8]) -> (&[u8], &[u8]) {
    let (line, rest) = match input.iter().position(|&b| b == b'\n') {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => (input, &input[input.len()..]),
    };
    let trimmed_len = line
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t' | b'\r'))
        .map_or(0, |i| i + 1);
    (&line[..trimmed_len], rest)
}
