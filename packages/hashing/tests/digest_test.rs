//! Fingerprint engine behaviour: known answers, determinism and renderings

use certid_hashing::{digest, Digest, HashError, Sha256Hasher, DIGEST_LENGTH};
use proptest::prelude::*;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const DEMO_SHA256: &str = "eb9c26baee47f19e4993a77bca936d0ff09e355a82d3db79bf154ebff1a80604";

#[test]
fn test_known_answers() {
    assert_eq!(digest(b"").to_hex(), EMPTY_SHA256);
    assert_eq!(digest(b"demo\n").to_hex(), DEMO_SHA256);
}

#[test]
fn test_digest_is_32_bytes() {
    let result = digest(b"test data");
    assert_eq!(result.as_bytes().len(), DIGEST_LENGTH);
    assert_eq!(result.to_vec().len(), 32);
}

#[test]
fn test_input_is_hashed_verbatim() {
    // A trailing newline is a different input, not a formatting detail
    assert_ne!(digest(b"demo"), digest(b"demo\n"));
}

#[test]
fn test_display_is_lowercase_hex() {
    let result = digest(b"demo\n");
    assert_eq!(result.to_string(), DEMO_SHA256);
    assert!(!result.to_hex().chars().any(|c| c.is_ascii_uppercase()));
}

#[test]
fn test_hex_and_base64_render_the_same_bytes() {
    let result = digest(b"demo\n");

    let from_hex = Digest::from_hex(&result.to_hex()).expect("hex parses");
    let from_base64 = Digest::from_base64(&result.to_base64()).expect("base64 parses");

    assert_eq!(from_hex.as_bytes(), result.as_bytes());
    assert_eq!(from_base64.as_bytes(), result.as_bytes());
    assert!(result.to_base64().ends_with('='));
    assert!(!result.to_base64url().contains('='));
}

#[test]
fn test_uppercase_hex_is_accepted() {
    let parsed = Digest::from_hex(&DEMO_SHA256.to_uppercase()).expect("uppercase hex parses");
    assert_eq!(parsed, digest(b"demo\n"));
}

#[test]
fn test_wrong_length_is_rejected() {
    match Digest::from_hex("abcd") {
        Err(HashError::InvalidLength { expected, actual }) => {
            assert_eq!(expected, 32);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected InvalidLength, got {other:?}"),
    }
}

#[test]
fn test_invalid_encoding_is_rejected() {
    assert!(matches!(
        Digest::from_hex("zz"),
        Err(HashError::InvalidEncoding(_))
    ));
    assert!(matches!(
        Digest::from_base64("***"),
        Err(HashError::InvalidEncoding(_))
    ));
}

#[test]
fn test_constant_time_match() {
    let a = digest(b"key material");
    let b = digest(b"key material");
    let c = digest(b"other material");

    assert!(a.matches(&b));
    assert!(!a.matches(&c));
}

#[test]
fn test_incremental_hasher_counts_bytes() {
    let mut hasher = Sha256Hasher::new();
    hasher.update(b"demo").update(b"\n");
    assert_eq!(hasher.total_bytes(), 5);
    assert_eq!(hasher.finalize().to_hex(), DEMO_SHA256);
}

proptest! {
    #[test]
    fn prop_digest_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(digest(&data), digest(&data));
    }

    #[test]
    fn prop_chunking_does_not_change_digest(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        split in 0usize..512,
    ) {
        let split = split.min(data.len());
        let mut hasher = Sha256Hasher::new();
        hasher.update(&data[..split]);
        hasher.update(&data[split..]);
        prop_assert_eq!(hasher.finalize(), digest(&data));
    }
}
