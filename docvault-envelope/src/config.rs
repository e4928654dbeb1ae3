//! Key-material configuration.
//!
//! Deployment configuration carries the two PEM halves with literal
//! newlines escaped as the two-character sequence `\n`; they are unescaped
//! before parsing. Absence of either half is a hard provisioning error
//! unless ephemeral generation is explicitly allowed.

use serde::{Deserialize, Serialize};

/// Environment variable holding the escaped public key PEM.
pub const PUBLIC_KEY_ENV: &str = "DOCVAULT_PUBLIC_KEY";

/// Environment variable holding the escaped private key PEM.
pub const PRIVATE_KEY_ENV: &str = "DOCVAULT_PRIVATE_KEY";

/// Environment variable opting in to ephemeral key generation.
pub const ALLOW_EPHEMERAL_ENV: &str = "DOCVAULT_ALLOW_EPHEMERAL_KEYS";

/// Configuration surface consumed by the key provisioner.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Public key PEM, escaped-newline encoded.
    pub public_key_pem: Option<String>,
    /// Private key PEM, escaped-newline encoded.
    pub private_key_pem: Option<String>,
    /// Explicit opt-in: generate an ephemeral pair when PEM config is missing.
    pub allow_ephemeral: bool,
}

impl KeyConfig {
    /// Reads the configuration surface from the process environment.
    pub fn from_env() -> Self {
        Self {
            public_key_pem: std::env::var(PUBLIC_KEY_ENV).ok(),
            private_key_pem: std::env::var(PRIVATE_KEY_ENV).ok(),
            allow_ephemeral: std::env::var(ALLOW_EPHEMERAL_ENV)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Public key PEM with `\n` escapes decoded, if configured.
    pub fn normalized_public_key(&self) -> Option<String> {
        self.public_key_pem.as_deref().map(unescape_newlines)
    }

    /// Private key PEM with `\n` escapes decoded, if configured.
    pub fn normalized_private_key(&self) -> Option<String> {
        self.private_key_pem.as_deref().map(unescape_newlines)
    }
}

fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}
