//! Encryption core for docvault.
//!
//! Protects sensitive uploaded documents (medical certificates,
//! institutional licenses, identity proofs) at rest using hybrid envelope
//! encryption:
//!
//! 1. **File key**: a fresh random AES-256 key per document, so compromise
//!    of one wrapped key never exposes another document.
//! 2. **Key wrapping**: each file key is encrypted with the deployment's
//!    long-lived RSA-2048 public key (OAEP, SHA-256).
//!
//! Credential storage uses Argon2id one-way hashing — a separate concern
//! with no key-wrapping relationship to the file pipeline. A decrypt-only
//! legacy codec reads documents sealed before the envelope scheme existed.
//!
//! Everything here is a pure, stateless transformation over caller-supplied
//! buffers and is safe to run concurrently without coordination.

mod cipher;
mod error;
pub mod legacy;
mod password;
mod wrap;

pub use cipher::{
    decrypt, encrypt, generate_iv, CipherMetadata, CipherOutput, FileKey, BLOCK_SIZE, IV_SIZE,
    KEY_SIZE,
};
pub use error::{CryptoError, CryptoResult};
pub use legacy::{decrypt_legacy, is_legacy_shape, MIN_LEGACY_LEN};
pub use password::{
    check_strength, hash_password, verify_password, StrengthReport, MIN_PASSWORD_LEN,
};
pub use wrap::{unwrap_key, wrap_key, RSA_KEY_BITS, WRAPPED_KEY_SIZE};
