//! Stored-package wire types.
//!
//! The `EncryptionPackage` is the persistence contract: everything needed
//! to recover a document except the private key. Packages are immutable
//! once created — a changed document is re-sealed into a brand-new package
//! and the old one is discarded by the caller.

use crate::error::{VaultError, VaultResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use docvault_crypto::IV_SIZE;
use serde::{Deserialize, Serialize};

/// Symmetric algorithm identifier recorded in package metadata.
pub const ALGORITHM: &str = "aes-256-cbc";

/// Field names a persistence layer should expect on the wire.
pub const PACKAGE_FIELDS: [&str; 4] = ["ciphertext", "wrappedKey", "iv", "metadata"];

/// Caller-supplied facts about the document being sealed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub original_name: String,
    pub mime_type: String,
    /// Logical field this document fills, e.g. "certificate" or
    /// "identityProof".
    pub field_name: String,
}

/// Descriptive metadata stored alongside the ciphertext.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    pub algorithm: String,
    pub rsa_key_length: u32,
    pub encrypted_at: DateTime<Utc>,
    pub original_size: u64,
    pub encrypted_size: u64,
    pub original_name: String,
    pub mime_type: String,
    pub field_name: String,
}

/// A sealed document: the unit of storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionPackage {
    /// AES-256-CBC output, base64.
    pub ciphertext: String,
    /// RSA-OAEP wrapped file key, base64.
    pub wrapped_key: String,
    /// CBC initialization vector, 32 hex chars.
    pub iv: String,
    pub metadata: PackageMetadata,
}

impl EncryptionPackage {
    pub fn ciphertext_bytes(&self) -> VaultResult<Vec<u8>> {
        BASE64.decode(&self.ciphertext).map_err(|e| {
            VaultError::MalformedPackage(format!("ciphertext is not valid base64: {e}"))
        })
    }

    pub fn wrapped_key_bytes(&self) -> VaultResult<Vec<u8>> {
        BASE64.decode(&self.wrapped_key).map_err(|e| {
            VaultError::MalformedPackage(format!("wrappedKey is not valid base64: {e}"))
        })
    }

    pub fn iv_bytes(&self) -> VaultResult<[u8; IV_SIZE]> {
        let bytes = hex::decode(&self.iv)
            .map_err(|e| VaultError::MalformedPackage(format!("iv is not valid hex: {e}")))?;
        bytes.as_slice().try_into().map_err(|_| {
            VaultError::MalformedPackage(format!(
                "iv must be {IV_SIZE} bytes, got {}",
                bytes.len()
            ))
        })
    }
}
