//! Shared test helpers: deterministic key pairs and legacy-format fixtures.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use docvault_envelope::{DocumentInfo, EnvelopeVault, KeyConfig, KeyPair, KeyProvisioner};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::{Arc, OnceLock};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// One generated pair per test binary, exposed the way deployments store it:
/// PEM halves with literal newlines escaped. RSA-2048 generation is
/// expensive, so every helper below shares this pair.
pub fn test_key_pems() -> &'static (String, String) {
    static PEMS: OnceLock<(String, String)> = OnceLock::new();
    PEMS.get_or_init(|| {
        let pair = KeyPair::generate().expect("key generation must succeed");
        (
            escape_newlines(&pair.public_pem().unwrap()),
            escape_newlines(&pair.private_pem().unwrap()),
        )
    })
}

pub fn escape_newlines(pem: &str) -> String {
    pem.replace('\n', "\\n")
}

/// Config carrying the shared test pair.
pub fn test_config() -> KeyConfig {
    let (public, private) = test_key_pems();
    KeyConfig {
        public_key_pem: Some(public.clone()),
        private_key_pem: Some(private.clone()),
        allow_ephemeral: false,
    }
}

pub fn test_provisioner() -> Arc<KeyProvisioner> {
    Arc::new(KeyProvisioner::new(test_config()))
}

pub fn test_vault() -> EnvelopeVault {
    EnvelopeVault::new(test_provisioner())
}

/// A vault with its own throwaway pair, for wrong-key tests.
pub fn ephemeral_vault() -> EnvelopeVault {
    let config = KeyConfig {
        allow_ephemeral: true,
        ..KeyConfig::default()
    };
    EnvelopeVault::new(Arc::new(KeyProvisioner::new(config)))
}

pub fn document_info() -> DocumentInfo {
    DocumentInfo {
        original_name: "certificate.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        field_name: "certificate".to_string(),
    }
}

/// Builds a blob the way the pre-envelope scheme wrote them:
/// SHA-256(secret) key, random IV prepended to the CBC ciphertext.
pub fn legacy_blob(plaintext: &[u8], secret: &str) -> Vec<u8> {
    let key: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
    let mut iv = [0u8; 16];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new_from_slices(&key, &iv)
        .unwrap()
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = iv.to_vec();
    blob.extend_from_slice(&ciphertext);
    blob
}
