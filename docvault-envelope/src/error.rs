//! Error types for the envelope layer.

use thiserror::Error;

/// Result type for envelope operations.
pub type VaultResult<T> = Result<T, VaultError>;

/// Errors that can occur in envelope orchestration.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Key configuration unreadable, missing, or generation failed.
    #[error("key provisioning failed: {0}")]
    KeyProvisioning(String),

    /// Stored bytes do not match any known package shape.
    #[error("malformed package: {0}")]
    MalformedPackage(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] docvault_crypto::CryptoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
