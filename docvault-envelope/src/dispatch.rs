//! Stored-format dispatch.
//!
//! Two on-disk formats coexist: the envelope package (JSON) and the legacy
//! IV-prefixed blob. Readers sniff the envelope shape first and fall back
//! to the legacy shape on a recognizable layout, instead of hard-coding an
//! assumed format.

use crate::package::EncryptionPackage;
use docvault_crypto::legacy;

/// Result of sniffing a stored document.
#[derive(Debug)]
pub enum StoredDocument<'a> {
    /// Parses as an envelope package.
    Envelope(Box<EncryptionPackage>),
    /// Matches the legacy IV-prefixed layout.
    Legacy(&'a [u8]),
    /// Neither format.
    Unrecognized,
}

impl<'a> StoredDocument<'a> {
    /// Detects which codec can read `raw`.
    pub fn detect(raw: &'a [u8]) -> Self {
        if let Ok(pkg) = serde_json::from_slice::<EncryptionPackage>(raw) {
            return StoredDocument::Envelope(Box::new(pkg));
        }
        if legacy::is_legacy_shape(raw) {
            return StoredDocument::Legacy(raw);
        }
        StoredDocument::Unrecognized
    }
}
