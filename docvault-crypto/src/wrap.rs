//! RSA-OAEP key wrapping.
//!
//! Wraps the per-document AES key under the deployment's RSA-2048 public
//! key. OAEP uses SHA-256 for both the label hash and mask generation, so
//! the wrapped output is randomized: wrapping the same key twice yields
//! different blobs, both of which unwrap to the same key.

use crate::cipher::KEY_SIZE;
use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

/// RSA modulus size in bits.
pub const RSA_KEY_BITS: usize = 2048;

/// Wrapped key size in bytes — the RSA-2048 modulus size, regardless of input.
pub const WRAPPED_KEY_SIZE: usize = 256;

/// Wraps a 32-byte symmetric key with RSA-2048-OAEP.
///
/// The output is always exactly [`WRAPPED_KEY_SIZE`] bytes.
pub fn wrap_key(key: &[u8], public: &RsaPublicKey) -> CryptoResult<Vec<u8>> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::KeyWrapFailed(format!(
            "symmetric key must be {KEY_SIZE} bytes, got {}",
            key.len()
        )));
    }
    if public.size() != WRAPPED_KEY_SIZE {
        return Err(CryptoError::KeyWrapFailed(format!(
            "public key modulus is {} bytes, expected {WRAPPED_KEY_SIZE}",
            public.size()
        )));
    }

    public
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), key)
        .map_err(|e| CryptoError::KeyWrapFailed(e.to_string()))
}

/// Unwraps a key previously wrapped under the matching public key.
///
/// Any blob not produced by the matching public key is rejected by the OAEP
/// padding check.
pub fn unwrap_key(wrapped: &[u8], private: &RsaPrivateKey) -> CryptoResult<Vec<u8>> {
    if wrapped.len() != WRAPPED_KEY_SIZE {
        return Err(CryptoError::KeyUnwrapFailed(format!(
            "wrapped key must be {WRAPPED_KEY_SIZE} bytes, got {}",
            wrapped.len()
        )));
    }

    private
        .decrypt(Oaep::new::<Sha256>(), wrapped)
        .map_err(|_| {
            CryptoError::KeyUnwrapFailed("OAEP rejected (wrong key pair or tampered data)".into())
        })
}
