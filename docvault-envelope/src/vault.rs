//! Envelope orchestration.
//!
//! Composes the symmetric cipher and the key wrapper into document-level
//! seal/open operations over the stored-package contract. No automatic
//! retry anywhere: a failed unwrap or decrypt means a corrupted package or
//! the wrong key pair, and retrying the same inputs cannot succeed.

use crate::dispatch::StoredDocument;
use crate::error::{VaultError, VaultResult};
use crate::package::{DocumentInfo, EncryptionPackage, PackageMetadata, ALGORITHM};
use crate::provisioner::KeyProvisioner;
use crate::status::StatusSummary;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use docvault_crypto::{self as crypto, legacy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Fixed payload sealed and re-opened by the operational health check.
const SELF_TEST_PAYLOAD: &[u8] = b"docvault-health-check-payload-v1";

/// Record returned by [`EnvelopeVault::seal_to_path`]: the ciphertext lives
/// in a file, the key material stays inline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedFileRecord {
    pub path: PathBuf,
    /// RSA-OAEP wrapped file key, base64.
    pub wrapped_key: String,
    /// CBC initialization vector, 32 hex chars.
    pub iv: String,
    pub metadata: PackageMetadata,
}

/// Document-level sealing and opening over the package contract.
pub struct EnvelopeVault {
    provisioner: Arc<KeyProvisioner>,
}

impl EnvelopeVault {
    pub fn new(provisioner: Arc<KeyProvisioner>) -> Self {
        Self { provisioner }
    }

    /// Seals a document into a storable package.
    ///
    /// Generates a fresh key and IV, encrypts, wraps the key under the
    /// deployment public key, and assembles full metadata. The sole entry
    /// point for protecting a new document — a caller-supplied key is never
    /// accepted.
    pub fn seal(&self, plaintext: &[u8], info: &DocumentInfo) -> VaultResult<EncryptionPackage> {
        let pair = self.provisioner.key_pair()?;
        let out = crypto::encrypt(plaintext, None)?;
        let wrapped = crypto::wrap_key(out.key.as_bytes(), &pair.public)?;

        Ok(EncryptionPackage {
            ciphertext: BASE64.encode(&out.ciphertext),
            wrapped_key: BASE64.encode(&wrapped),
            iv: hex::encode(out.iv),
            metadata: PackageMetadata {
                algorithm: ALGORITHM.to_string(),
                rsa_key_length: crypto::RSA_KEY_BITS as u32,
                encrypted_at: out.metadata.encrypted_at,
                original_size: out.metadata.original_size,
                encrypted_size: out.metadata.encrypted_size,
                original_name: info.original_name.clone(),
                mime_type: info.mime_type.clone(),
                field_name: info.field_name.clone(),
            },
        })
    }

    /// Opens a stored package back into the original buffer.
    ///
    /// `KeyUnwrapFailed` and `DecryptionFailed` propagate unchanged;
    /// undecodable fields surface as `MalformedPackage`.
    pub fn open(&self, pkg: &EncryptionPackage) -> VaultResult<Vec<u8>> {
        let pair = self.provisioner.key_pair()?;
        let wrapped = pkg.wrapped_key_bytes()?;
        let ciphertext = pkg.ciphertext_bytes()?;
        let iv = pkg.iv_bytes()?;

        let key = crypto::unwrap_key(&wrapped, &pair.private)?;
        Ok(crypto::decrypt(&ciphertext, &key, &iv)?)
    }

    /// Seals a fixed payload and opens it again, byte-comparing the result.
    ///
    /// An operational health probe: any internal failure is logged and
    /// reported as `false`, never propagated.
    pub fn verify_self_test(&self) -> bool {
        let info = DocumentInfo {
            original_name: "health-check.bin".to_string(),
            mime_type: "application/octet-stream".to_string(),
            field_name: "healthCheck".to_string(),
        };

        let pkg = match self.seal(SELF_TEST_PAYLOAD, &info) {
            Ok(pkg) => pkg,
            Err(e) => {
                warn!("self-test seal failed: {e}");
                return false;
            }
        };

        match self.open(&pkg) {
            Ok(plaintext) if plaintext == SELF_TEST_PAYLOAD => true,
            Ok(_) => {
                warn!("self-test round trip produced different bytes");
                false
            }
            Err(e) => {
                warn!("self-test open failed: {e}");
                false
            }
        }
    }

    /// Describes active algorithms, whether a key pair is loaded, and the
    /// package fields a persistence layer should expect. Read-only; does
    /// not force key resolution.
    pub fn report_status(&self) -> StatusSummary {
        StatusSummary::new(self.provisioner.is_resolved())
    }

    /// Seals a document and writes the ciphertext bytes to `dest`.
    ///
    /// For deployments that keep large blobs out of the primary store. Key
    /// material is still routed through the same seal path; the
    /// cryptographic contract is identical to [`EnvelopeVault::seal`].
    pub fn seal_to_path(
        &self,
        plaintext: &[u8],
        dest: &Path,
        info: &DocumentInfo,
    ) -> VaultResult<SealedFileRecord> {
        let pkg = self.seal(plaintext, info)?;
        fs::write(dest, pkg.ciphertext_bytes()?)?;

        Ok(SealedFileRecord {
            path: dest.to_path_buf(),
            wrapped_key: pkg.wrapped_key,
            iv: pkg.iv,
            metadata: pkg.metadata,
        })
    }

    /// Reads ciphertext from the record's path and opens it through the
    /// same package contract as [`EnvelopeVault::open`].
    pub fn open_from_path(&self, record: &SealedFileRecord) -> VaultResult<Vec<u8>> {
        let ciphertext = fs::read(&record.path)?;
        let pkg = EncryptionPackage {
            ciphertext: BASE64.encode(&ciphertext),
            wrapped_key: record.wrapped_key.clone(),
            iv: record.iv.clone(),
            metadata: record.metadata.clone(),
        };
        self.open(&pkg)
    }

    /// Reads a stored document of unknown format: envelope shape first,
    /// legacy single-key blob as fallback.
    pub fn open_stored(&self, raw: &[u8], legacy_secret: Option<&str>) -> VaultResult<Vec<u8>> {
        match StoredDocument::detect(raw) {
            StoredDocument::Envelope(pkg) => self.open(&pkg),
            StoredDocument::Legacy(blob) => {
                let secret = legacy_secret.ok_or_else(|| {
                    VaultError::MalformedPackage(
                        "blob matches the legacy layout but no legacy secret was supplied".into(),
                    )
                })?;
                Ok(legacy::decrypt_legacy(blob, secret)?)
            }
            StoredDocument::Unrecognized => Err(VaultError::MalformedPackage(
                "stored bytes match neither the envelope package nor the legacy layout".into(),
            )),
        }
    }
}
