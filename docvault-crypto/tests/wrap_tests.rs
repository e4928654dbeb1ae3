//! Tests for RSA-2048-OAEP key wrapping.

use docvault_crypto::{unwrap_key, wrap_key, CryptoError, FileKey, KEY_SIZE, WRAPPED_KEY_SIZE};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::sync::OnceLock;

/// One shared pair per test binary; RSA-2048 generation is expensive.
fn test_pair() -> &'static (RsaPrivateKey, RsaPublicKey) {
    static PAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
    PAIR.get_or_init(|| {
        let private = RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).unwrap();
        let public = RsaPublicKey::from(&private);
        (private, public)
    })
}

// ── Round Trips ──

#[test]
fn wrap_unwrap_roundtrip() {
    let (private, public) = test_pair();
    let key = FileKey::generate();

    let wrapped = wrap_key(key.as_bytes(), public).unwrap();
    let recovered = unwrap_key(&wrapped, private).unwrap();

    assert_eq!(recovered, key.as_bytes());
}

#[test]
fn wrapped_key_is_exactly_modulus_size() {
    let (_, public) = test_pair();
    let key = FileKey::generate();

    let wrapped = wrap_key(key.as_bytes(), public).unwrap();
    assert_eq!(wrapped.len(), WRAPPED_KEY_SIZE);
}

#[test]
fn each_wrap_produces_different_blob() {
    let (private, public) = test_pair();
    let key = FileKey::generate();

    let a = wrap_key(key.as_bytes(), public).unwrap();
    let b = wrap_key(key.as_bytes(), public).unwrap();

    // OAEP is randomized
    assert_ne!(a, b);
    assert_eq!(unwrap_key(&a, private).unwrap(), key.as_bytes());
    assert_eq!(unwrap_key(&b, private).unwrap(), key.as_bytes());
}

// ── Length Contracts ──

#[test]
fn wrap_rejects_short_key() {
    let (_, public) = test_pair();
    let err = wrap_key(&[0u8; 16], public).unwrap_err();
    assert!(matches!(err, CryptoError::KeyWrapFailed(_)));
}

#[test]
fn wrap_rejects_long_key() {
    let (_, public) = test_pair();
    let err = wrap_key(&[0u8; KEY_SIZE + 1], public).unwrap_err();
    assert!(matches!(err, CryptoError::KeyWrapFailed(_)));
}

#[test]
fn unwrap_rejects_wrong_length_blob() {
    let (private, _) = test_pair();
    let err = unwrap_key(&[0u8; 128], private).unwrap_err();
    assert!(matches!(err, CryptoError::KeyUnwrapFailed(_)));
}

// ── Wrap Binding ──

#[test]
fn unwrap_with_wrong_private_key_fails() {
    let (_, public) = test_pair();
    let other = RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).unwrap();
    let key = FileKey::generate();

    let wrapped = wrap_key(key.as_bytes(), public).unwrap();
    let err = unwrap_key(&wrapped, &other).unwrap_err();

    assert!(matches!(err, CryptoError::KeyUnwrapFailed(_)));
}

#[test]
fn tampered_wrapped_key_fails() {
    let (private, public) = test_pair();
    let key = FileKey::generate();

    let mut wrapped = wrap_key(key.as_bytes(), public).unwrap();
    wrapped[0] ^= 0xFF;

    let err = unwrap_key(&wrapped, private).unwrap_err();
    assert!(matches!(err, CryptoError::KeyUnwrapFailed(_)));
}

#[test]
fn garbage_blob_fails() {
    let (private, _) = test_pair();
    let err = unwrap_key(&[0xDE; WRAPPED_KEY_SIZE], private).unwrap_err();
    assert!(matches!(err, CryptoError::KeyUnwrapFailed(_)));
}
