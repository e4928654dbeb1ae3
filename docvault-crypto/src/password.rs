//! One-way credential hashing.
//!
//! Argon2id with the crate-default cost (on the order of 100 ms on
//! commodity hardware). The salt is generated fresh per call and embedded
//! in the PHC output string, so no separate salt storage is needed.
//! Hashes are compared, never decoded.

use crate::error::{CryptoError, CryptoResult};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::Serialize;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hashes a password for credential storage.
///
/// Two calls with the same password produce different strings (fresh salt
/// per call); both verify against the original password.
pub fn hash_password(password: &str) -> CryptoResult<String> {
    if password.is_empty() {
        return Err(CryptoError::InvalidInput("password must not be empty".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash in constant time.
///
/// A non-matching password returns `Ok(false)`; only a malformed hash
/// string is an error.
pub fn verify_password(password: &str, hash: &str) -> CryptoResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| CryptoError::InvalidInput(format!("malformed password hash: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CryptoError::InvalidInput(format!(
            "malformed password hash: {e}"
        ))),
    }
}

/// Password strength verdict. Pure validation, no cryptography.
#[derive(Clone, Debug, Serialize)]
pub struct StrengthReport {
    pub valid: bool,
    pub reason: Option<String>,
}

/// Checks length and character-class requirements before hashing.
pub fn check_strength(password: &str) -> StrengthReport {
    let fail = |reason: &str| StrengthReport {
        valid: false,
        reason: Some(reason.to_string()),
    };

    if password.len() < MIN_PASSWORD_LEN {
        return fail("password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return fail("password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return fail("password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return fail("password must contain a digit");
    }

    StrengthReport {
        valid: true,
        reason: None,
    }
}
