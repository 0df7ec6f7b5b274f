//! PEM framing: accepted layouts, rejected layouts, multi-block input

use certid_pki::{decode_pem, decode_pem_with_rest, encode_pem, PemBlock, PkiError};

const CSR_PEM: &[u8] = include_bytes!("fixtures/csr.pem");
const PUBLIC_KEY_PEM: &[u8] = include_bytes!("fixtures/public_key.pem");

const SHORT_KEY: &str = "MCowBQYDK2VwAyEANnSnr1OJYucBaARrnvo6+QsnB0cohctRG0TcEDESQf4=";

fn is_malformed(result: Result<PemBlock, PkiError>) -> bool {
    matches!(result, Err(PkiError::MalformedPem(_)))
}

#[test]
fn test_fixtures_decode_with_their_labels() {
    let csr = decode_pem(CSR_PEM).expect("csr fixture");
    assert_eq!(csr.label(), "CERTIFICATE REQUEST");
    assert!(csr.is_certificate_request());
    assert_eq!(csr.bytes()[0], 0x30);

    let key = decode_pem(PUBLIC_KEY_PEM).expect("key fixture");
    assert_eq!(key.label(), "PUBLIC KEY");
    assert!(key.is_public_key());
}

#[test]
fn test_whitespace_inside_body_is_ignored() {
    let (head, tail) = SHORT_KEY.split_at(20);
    let spaced = format!("-----BEGIN PUBLIC KEY-----\r\n {head}\t\r\n  {tail} \r\n-----END PUBLIC KEY-----\r\n");
    let compact = format!("-----BEGIN PUBLIC KEY-----\n{SHORT_KEY}\n-----END PUBLIC KEY-----\n");

    assert_eq!(
        decode_pem(spaced.as_bytes()).expect("spaced"),
        decode_pem(compact.as_bytes()).expect("compact")
    );
}

#[test]
fn test_leading_and_trailing_text_is_ignored() {
    let input = format!(
        "subject=CN=demo\nissuer=CN=demo\n-----BEGIN PUBLIC KEY-----\n{SHORT_KEY}\n-----END PUBLIC KEY-----\ntrailing garbage"
    );
    let block = decode_pem(input.as_bytes()).expect("framed block");
    assert_eq!(block.bytes().len(), 44);
}

#[test]
fn test_trailing_blanks_on_marker_lines() {
    let input = format!("-----BEGIN PUBLIC KEY-----  \t\n{SHORT_KEY}\n-----END PUBLIC KEY-----   ");
    assert!(decode_pem(input.as_bytes()).is_ok());
}

#[test]
fn test_missing_footer_is_rejected() {
    let input = format!("-----BEGIN PUBLIC KEY-----\n{SHORT_KEY}\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));
}

#[test]
fn test_missing_header_is_rejected() {
    let input = format!("{SHORT_KEY}\n-----END PUBLIC KEY-----\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));
    assert!(is_malformed(decode_pem(b"")));
}

#[test]
fn test_indented_block_is_rejected() {
    let indented: String = String::from_utf8_lossy(CSR_PEM)
        .lines()
        .map(|line| format!("    {line}\n"))
        .collect();
    assert!(is_malformed(decode_pem(indented.as_bytes())));
}

#[test]
fn test_mismatched_footer_label_is_rejected() {
    let input = format!("-----BEGIN PUBLIC KEY-----\n{SHORT_KEY}\n-----END CERTIFICATE-----\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));

    match decode_pem(input.as_bytes()) {
        Err(PkiError::MalformedPem(reason)) => {
            assert!(reason.contains("CERTIFICATE") && reason.contains("PUBLIC KEY"), "{reason}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_blank_line_inside_body_is_rejected() {
    let (head, tail) = SHORT_KEY.split_at(20);
    let input = format!("-----BEGIN PUBLIC KEY-----\n{head}\n\n{tail}\n-----END PUBLIC KEY-----\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));
}

#[test]
fn test_unterminated_begin_line_is_rejected() {
    let input = format!("-----BEGIN PUBLIC KEY\n{SHORT_KEY}\n-----END PUBLIC KEY-----\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));
}

#[test]
fn test_footer_must_start_a_line() {
    let input = format!("-----BEGIN PUBLIC KEY-----\n{SHORT_KEY}-----END PUBLIC KEY-----\n");
    assert!(is_malformed(decode_pem(input.as_bytes())));
}

#[test]
fn test_invalid_base64_is_rejected() {
    let input = "-----BEGIN PUBLIC KEY-----\nnot*base64!\n-----END PUBLIC KEY-----\n";
    assert!(is_malformed(decode_pem(input.as_bytes())));
}

#[test]
fn test_only_first_block_is_decoded() {
    let mut input = PUBLIC_KEY_PEM.to_vec();
    input.extend_from_slice(CSR_PEM);

    let (first, rest) = decode_pem_with_rest(&input).expect("first block");
    assert_eq!(first.label(), "PUBLIC KEY");
    assert_eq!(decode_pem(&input).expect("first block"), first);

    let (second, rest) = decode_pem_with_rest(rest).expect("second block");
    assert_eq!(second.label(), "CERTIFICATE REQUEST");
    assert!(rest.is_empty());
}

#[test]
fn test_other_labels_pass_through() {
    let input = format!("-----BEGIN OPAQUE THING-----\n{SHORT_KEY}\n-----END OPAQUE THING-----\n");
    let block = decode_pem(input.as_bytes()).expect("opaque label");
    assert_eq!(block.label(), "OPAQUE THING");
    assert!(!block.is_public_key());
    assert!(matches!(
        block.require_label("PUBLIC KEY"),
        Err(PkiError::UnexpectedPemLabel { .. })
    ));
}

#[test]
fn test_encode_wraps_at_64_columns() {
    let block = decode_pem(CSR_PEM).expect("csr fixture");
    let armoured = encode_pem(block.label(), block.bytes());

    assert!(armoured.starts_with("-----BEGIN CERTIFICATE REQUEST-----\n"));
    assert!(armoured.ends_with("-----END CERTIFICATE REQUEST-----\n"));
    assert!(armoured.lines().all(|line| line.len() <= 64 || line.starts_with("-----")));
    assert_eq!(decode_pem(armoured.as_bytes()).expect("re-armoured"), block);
    assert_eq!(block.to_pem(), armoured);
}
