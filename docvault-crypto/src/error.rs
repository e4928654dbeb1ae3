//! Typed errors for the crypto core.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
///
/// Every failure is surfaced to the immediate caller; nothing is swallowed
/// inside the crypto core.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Malformed input rejected before any crypto runs.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// RSA wrap rejected the symmetric key.
    #[error("key wrap failed: {0}")]
    KeyWrapFailed(String),

    /// RSA unwrap rejected the blob (wrong key pair or tampered data).
    #[error("key unwrap failed: {0}")]
    KeyUnwrapFailed(String),

    /// CBC padding validation failed after running the block cipher.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    /// Cipher-side operational failure, rare.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Password hashing itself failed, rare.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}
