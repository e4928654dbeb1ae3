//! Operational status reporting.

use crate::package::{ALGORITHM, PACKAGE_FIELDS};
use docvault_crypto::RSA_KEY_BITS;
use serde::Serialize;

/// Key-wrap algorithm identifier.
pub const KEY_WRAP_ALGORITHM: &str = "rsa-oaep-sha256";

/// Read-only snapshot of the subsystem's active configuration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub algorithm: &'static str,
    pub key_wrap_algorithm: &'static str,
    pub rsa_key_length: u32,
    /// Whether a key pair has been resolved and cached.
    pub key_pair_loaded: bool,
    /// Package fields a persistence layer should expect to see.
    pub package_fields: Vec<&'static str>,
}

impl StatusSummary {
    pub(crate) fn new(key_pair_loaded: bool) -> Self {
        Self {
            algorithm: ALGORITHM,
            key_wrap_algorithm: KEY_WRAP_ALGORITHM,
            rsa_key_length: RSA_KEY_BITS as u32,
            key_pair_loaded,
            package_fields: PACKAGE_FIELDS.to_vec(),
        }
    }
}
