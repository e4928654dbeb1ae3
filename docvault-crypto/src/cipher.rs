//! Symmetric file cipher: AES-256-CBC with PKCS#7 padding.
//!
//! Every encryption draws a fresh IV from the OS CSPRNG, and a fresh key
//! too unless the caller supplies one. Two encryptions of identical
//! plaintext therefore never produce identical ciphertext.

use crate::error::{CryptoError, CryptoResult};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// A per-document symmetric key.
///
/// Generated once per sealing operation and never reused across documents.
/// Zeroized on drop; `Debug` never prints the key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FileKey([u8; KEY_SIZE]);

impl FileKey {
    /// Generates a fresh key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for FileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FileKey").field(&"[REDACTED]").finish()
    }
}

/// Generates a fresh CBC initialization vector.
pub fn generate_iv() -> [u8; IV_SIZE] {
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Size and timing facts recorded at encryption time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CipherMetadata {
    pub original_size: u64,
    pub encrypted_size: u64,
    pub encrypted_at: DateTime<Utc>,
}

/// Output of a single encryption: the ciphertext plus the key and IV that
/// produced it.
pub struct CipherOutput {
    pub ciphertext: Vec<u8>,
    pub key: FileKey,
    pub iv: [u8; IV_SIZE],
    pub metadata: CipherMetadata,
}

/// Encrypts `plaintext` with AES-256-CBC.
///
/// A fresh key is generated when `key` is `None`; the IV is always fresh.
/// Pure transformation — no I/O, no shared state.
pub fn encrypt(plaintext: &[u8], key: Option<&FileKey>) -> CryptoResult<CipherOutput> {
    let key = match key {
        Some(k) => k.clone(),
        None => FileKey::generate(),
    };
    let iv = generate_iv();

    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| CryptoError::Encryption(format!("cipher init failed: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    Ok(CipherOutput {
        metadata: CipherMetadata {
            original_size: plaintext.len() as u64,
            encrypted_size: ciphertext.len() as u64,
            encrypted_at: Utc::now(),
        },
        ciphertext,
        key,
        iv,
    })
}

/// Decrypts AES-256-CBC ciphertext.
///
/// Key and IV lengths are checked before any cipher work runs. Padding
/// validation is the only tamper signal CBC provides; its failure surfaces
/// as [`CryptoError::DecryptionFailed`].
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    if iv.len() != IV_SIZE {
        return Err(CryptoError::InvalidIvLength {
            expected: IV_SIZE,
            actual: iv.len(),
        });
    }
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailed(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| CryptoError::DecryptionFailed(format!("cipher init failed: {e}")))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            CryptoError::DecryptionFailed("padding check failed (wrong key or tampered data)".into())
        })
}
