//! RSA key pair provisioning.
//!
//! The provisioner is constructed once at startup and injected wherever key
//! material is needed — never a lazily-initialized global. The pair is
//! resolved at most once per process; the cache is read-only afterwards, so
//! concurrent readers never race and the active pair cannot drift
//! mid-process.

use crate::config::KeyConfig;
use crate::error::{VaultError, VaultResult};
use docvault_crypto::RSA_KEY_BITS;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// The deployment's long-lived RSA-2048 key pair. Exactly one active pair
/// per deployment; read-only after provisioning.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}

impl KeyPair {
    /// Generates a fresh RSA-2048 pair.
    pub fn generate() -> VaultResult<Self> {
        let private = RsaPrivateKey::new(&mut rand::rngs::OsRng, RSA_KEY_BITS)
            .map_err(|e| VaultError::KeyProvisioning(format!("key generation failed: {e}")))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { public, private })
    }

    /// Public half as SPKI PEM.
    pub fn public_pem(&self) -> VaultResult<String> {
        self.public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| VaultError::KeyProvisioning(format!("public PEM encoding failed: {e}")))
    }

    /// Private half as PKCS#8 PEM.
    pub fn private_pem(&self) -> VaultResult<String> {
        self.private
            .to_pkcs8_pem(LineEnding::LF)
            .map(|pem| pem.to_string())
            .map_err(|e| VaultError::KeyProvisioning(format!("private PEM encoding failed: {e}")))
    }
}

fn parse_public_pem(pem: &str) -> VaultResult<RsaPublicKey> {
    if let Ok(key) = RsaPublicKey::from_public_key_pem(pem) {
        return Ok(key);
    }
    RsaPublicKey::from_pkcs1_pem(pem)
        .map_err(|e| VaultError::KeyProvisioning(format!("unreadable public key PEM: {e}")))
}

fn parse_private_pem(pem: &str) -> VaultResult<RsaPrivateKey> {
    if let Ok(key) = RsaPrivateKey::from_pkcs8_pem(pem) {
        return Ok(key);
    }
    RsaPrivateKey::from_pkcs1_pem(pem)
        .map_err(|e| VaultError::KeyProvisioning(format!("unreadable private key PEM: {e}")))
}

/// Resolves and caches the process-wide key pair.
pub struct KeyProvisioner {
    config: KeyConfig,
    pair: OnceLock<KeyPair>,
}

impl KeyProvisioner {
    pub fn new(config: KeyConfig) -> Self {
        Self {
            config,
            pair: OnceLock::new(),
        }
    }

    /// Whether a pair has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.pair.get().is_some()
    }

    /// Returns the process-wide pair, resolving it lazily on first use.
    ///
    /// Never re-resolves after the first success. Concurrent first calls may
    /// both resolve and either result wins the cache write; configuration
    /// resolution is deterministic, and ephemeral generation requires
    /// explicit opt-in.
    pub fn key_pair(&self) -> VaultResult<&KeyPair> {
        if let Some(pair) = self.pair.get() {
            return Ok(pair);
        }
        let resolved = self.resolve()?;
        Ok(self.pair.get_or_init(|| resolved))
    }

    fn resolve(&self) -> VaultResult<KeyPair> {
        match (
            self.config.normalized_public_key(),
            self.config.normalized_private_key(),
        ) {
            (Some(public_pem), Some(private_pem)) => {
                let public = parse_public_pem(&public_pem)?;
                let private = parse_private_pem(&private_pem)?;
                debug!("loaded RSA key pair from configuration");
                Ok(KeyPair { public, private })
            }
            _ if self.config.allow_ephemeral => {
                let pair = KeyPair::generate()?;
                warn!(
                    "key configuration missing; generated an EPHEMERAL RSA-2048 pair. \
                     Documents sealed under it become permanently unreadable after \
                     restart unless this material is persisted externally."
                );
                warn!("ephemeral public key:\n{}", pair.public_pem()?);
                warn!("ephemeral private key:\n{}", pair.private_pem()?);
                Ok(pair)
            }
            _ => Err(VaultError::KeyProvisioning(
                "public/private key PEM missing from configuration \
                 (set allow_ephemeral to generate a throwaway pair)"
                    .into(),
            )),
        }
    }
}
