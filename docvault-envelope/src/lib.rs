//! Envelope orchestration for docvault.
//!
//! Composes the crypto core into document-level operations over a stored
//! package contract:
//!
//! 1. **Seal**: fresh AES-256 key and IV per document, key wrapped under
//!    the deployment's RSA-2048 public key, package assembled with full
//!    metadata.
//! 2. **Open**: unwrap the file key with the private key, decrypt, return
//!    the original buffer.
//!
//! Key material is resolved once per process by an injected
//! [`KeyProvisioner`] — never a lazily-initialized global — so tests can
//! supply deterministic pairs and production fails fast on missing
//! configuration instead of silently generating ephemeral keys.

mod config;
mod dispatch;
mod error;
mod package;
mod provisioner;
mod status;
mod vault;

pub use config::{KeyConfig, ALLOW_EPHEMERAL_ENV, PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};
pub use dispatch::StoredDocument;
pub use error::{VaultError, VaultResult};
pub use package::{DocumentInfo, EncryptionPackage, PackageMetadata, ALGORITHM, PACKAGE_FIELDS};
pub use provisioner::{KeyPair, KeyProvisioner};
pub use status::{StatusSummary, KEY_WRAP_ALGORITHM};
pub use vault::{EnvelopeVault, SealedFileRecord};
