//! Legacy single-key codec.
//!
//! Documents sealed before the envelope scheme used one key derived from a
//! shared secret (SHA-256) with the IV prepended to the ciphertext. This
//! path is decrypt-only: new writes always go through the envelope, and
//! readers should try the envelope package shape first.

use crate::cipher::{self, BLOCK_SIZE, IV_SIZE};
use crate::error::{CryptoError, CryptoResult};
use sha2::{Digest, Sha256};

/// Minimum size of a legacy blob: one IV plus one cipher block.
pub const MIN_LEGACY_LEN: usize = IV_SIZE + BLOCK_SIZE;

/// Structural check for the legacy blob layout (IV-prefixed, block-aligned).
pub fn is_legacy_shape(blob: &[u8]) -> bool {
    blob.len() >= MIN_LEGACY_LEN && blob.len() % BLOCK_SIZE == 0
}

/// Decrypts a legacy blob with the single key derived from `secret`.
pub fn decrypt_legacy(blob: &[u8], secret: &str) -> CryptoResult<Vec<u8>> {
    if !is_legacy_shape(blob) {
        return Err(CryptoError::DecryptionFailed(format!(
            "blob of {} bytes does not match the legacy layout",
            blob.len()
        )));
    }

    let key: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
    let (iv, ciphertext) = blob.split_at(IV_SIZE);
    cipher::decrypt(ciphertext, &key, iv)
}
