//! Key fingerprints over canonical SubjectPublicKeyInfo DER

use certid_pki::{
    csr_from_pem, decode_pem, fingerprint_pem, fingerprint_public_key, fingerprint_rsa_public_key,
    pem_to_rsa_public_key, public_key_from_pem, Digest, PkiError,
};

const CSR_PEM: &[u8] = include_bytes!("fixtures/csr.pem");
const PUBLIC_KEY_PEM: &[u8] = include_bytes!("fixtures/public_key.pem");
const PKCS1_PEM: &[u8] = include_bytes!("fixtures/rsa_public_key_pkcs1.pem");
const EC_CSR_PEM: &[u8] = include_bytes!("fixtures/ec_csr.pem");
const EC_PUBLIC_KEY_PEM: &[u8] = include_bytes!("fixtures/ec_public_key.pem");
const ED25519_PUBLIC_KEY_PEM: &[u8] = include_bytes!("fixtures/ed25519_public_key.pem");
const RSA_OU_CSR_PEM: &[u8] = include_bytes!("fixtures/rsa_ou_csr.pem");
const RSA_8192_CSR_PEM: &[u8] = include_bytes!("fixtures/rsa8192_csr.pem");
const RSA_8192_PUBLIC_KEY_PEM: &[u8] = include_bytes!("fixtures/rsa8192_public_key.pem");

const RSA_4096_FINGERPRINT: &str =
    "385a4f8346c570051b3b61411ce99908b7c7925040f8092de0488115a4e6921e";
const RSA_4096_FINGERPRINT_B64: &str = "OFpPg0bFcAUbO2FBHOmZCLfHklBA+Akt4EiBFaTmkh4=";
const RSA_2048_FINGERPRINT: &str =
    "885a436fe6f8c8e897f29a4550f03d57203e68ecf99a79614d4c812873ad464e";
const RSA_8192_FINGERPRINT: &str =
    "f7e849f46189c2998ba663927d80ad74076d32d4ff6ae7765c47dd926b98f120";
const EC_P256_FINGERPRINT: &str =
    "7f648b59dbdac894b1dd30340a0f374caf4f42dcf4a3a7149d7d5922b3f49363";
const ED25519_FINGERPRINT: &str =
    "e35c57db0ad2b132c86dd494b0f8129d5f4fe59551a530e4682544d19e371fcc";

#[test]
fn test_known_rsa_fingerprint() {
    let fingerprint = fingerprint_pem(PUBLIC_KEY_PEM).expect("fingerprint");
    assert_eq!(fingerprint.to_hex(), RSA_4096_FINGERPRINT);
    assert_eq!(fingerprint.to_base64(), RSA_4096_FINGERPRINT_B64);
}

#[test]
fn test_csr_and_key_share_a_fingerprint() {
    let from_csr = fingerprint_pem(CSR_PEM).expect("CSR fingerprint");
    let from_key = fingerprint_pem(PUBLIC_KEY_PEM).expect("key fingerprint");
    let from_pkcs1 = fingerprint_pem(PKCS1_PEM).expect("PKCS#1 fingerprint");
    assert_eq!(from_csr, from_key);
    assert_eq!(from_pkcs1, from_key);

    let csr = csr_from_pem(CSR_PEM).expect("valid CSR");
    assert_eq!(fingerprint_public_key(csr.public_key()).expect("fingerprint"), from_key);
}

#[test]
fn test_rsa_fingerprint_after_normalization() {
    let key = pem_to_rsa_public_key(PUBLIC_KEY_PEM).expect("RSA key");
    let fingerprint = fingerprint_rsa_public_key(&key).expect("fingerprint");
    assert_eq!(fingerprint, Digest::from_hex(RSA_4096_FINGERPRINT).expect("hex"));

    assert_eq!(
        fingerprint_pem(RSA_OU_CSR_PEM).expect("fingerprint").to_hex(),
        RSA_2048_FINGERPRINT
    );
}

#[test]
fn test_non_rsa_keys_are_fingerprinted() {
    let ec = fingerprint_pem(EC_PUBLIC_KEY_PEM).expect("EC fingerprint");
    assert_eq!(ec.to_hex(), EC_P256_FINGERPRINT);
    assert_eq!(fingerprint_pem(EC_CSR_PEM).expect("EC CSR fingerprint"), ec);

    let ed = public_key_from_pem(ED25519_PUBLIC_KEY_PEM).expect("Ed25519 key");
    assert_eq!(
        fingerprint_public_key(&ed).expect("fingerprint").to_hex(),
        ED25519_FINGERPRINT
    );
}

#[test]
fn test_fingerprint_is_over_der_not_pem() {
    let der = decode_pem(PUBLIC_KEY_PEM).expect("PEM").into_bytes();
    assert_eq!(certid_hashing::digest(&der).to_hex(), RSA_4096_FINGERPRINT);
    assert_ne!(certid_hashing::digest(PUBLIC_KEY_PEM).to_hex(), RSA_4096_FINGERPRINT);
}

#[test]
fn test_renderings_round_trip() {
    let fingerprint = fingerprint_pem(PUBLIC_KEY_PEM).expect("fingerprint");
    assert_eq!(fingerprint_pem(PUBLIC_KEY_PEM).expect("again"), fingerprint);
    assert_eq!(Digest::from_hex(&fingerprint.to_hex()).expect("hex"), fingerprint);
    assert_eq!(Digest::from_base64(&fingerprint.to_base64()).expect("base64"), fingerprint);
    assert!(fingerprint.matches(&Digest::from_base64(RSA_4096_FINGERPRINT_B64).expect("base64")));
}

#[test]
fn test_unsupported_label() {
    let pem = certid_pki::encode_pem("CERTIFICATE", b"\x30\x00");
    assert!(matches!(
        fingerprint_pem(pem.as_bytes()),
        Err(PkiError::UnexpectedPemLabel { .. })
    ));
}

#[test]
fn test_8192_bit_rsa_fingerprint() {
    let from_key = fingerprint_pem(RSA_8192_PUBLIC_KEY_PEM).expect("key fingerprint");
    assert_eq!(from_key.to_hex(), RSA_8192_FINGERPRINT);
    assert_eq!(fingerprint_pem(RSA_8192_CSR_PEM).expect("CSR fingerprint"), from_key);
}
