//! Public key decoding and normalization

pub mod normalize;
pub mod public_key;

pub use normalize::{
    describe_rsa_public_key, pem_to_rsa_public_key, public_key_from_pem, to_rsa_public_key,
    RsaKeySummary,
};
pub use public_key::{PublicKey, MAX_RSA_MODULUS_BITS, RSA_ENCRYPTION};
