//! Stored-format dispatch and the filesystem adapters.

mod support;

use docvault_envelope::{EncryptionPackage, StoredDocument, VaultError};

// ── Format Sniffing ──

#[test]
fn detects_envelope_package() {
    let vault = support::test_vault();
    let pkg = vault.seal(b"enveloped", &support::document_info()).unwrap();
    let raw = serde_json::to_vec(&pkg).unwrap();

    assert!(matches!(
        StoredDocument::detect(&raw),
        StoredDocument::Envelope(_)
    ));
}

#[test]
fn detects_legacy_blob() {
    let blob = support::legacy_blob(b"pre-envelope record", "secret");
    assert!(matches!(
        StoredDocument::detect(&blob),
        StoredDocument::Legacy(_)
    ));
}

#[test]
fn rejects_unrecognized_bytes() {
    // Too short for the legacy layout, not an envelope
    assert!(matches!(
        StoredDocument::detect(b"plain note"),
        StoredDocument::Unrecognized
    ));
}

#[test]
fn json_without_package_fields_is_not_an_envelope() {
    let raw = br#"{"foo": 1, "bar": "baz"}"#;
    assert!(matches!(
        StoredDocument::detect(raw),
        StoredDocument::Unrecognized
    ));
}

#[test]
fn legacy_blob_does_not_parse_as_package() {
    // The orchestrator must reject the old format, not crash on it
    let blob = support::legacy_blob(b"old document", "secret");
    assert!(serde_json::from_slice::<EncryptionPackage>(&blob).is_err());
}

// ── open_stored ──

#[test]
fn open_stored_reads_envelope_format() {
    let vault = support::test_vault();
    let pkg = vault
        .seal(b"current format", &support::document_info())
        .unwrap();
    let raw = serde_json::to_vec(&pkg).unwrap();

    assert_eq!(vault.open_stored(&raw, None).unwrap(), b"current format");
}

#[test]
fn open_stored_falls_back_to_legacy() {
    let vault = support::test_vault();
    let blob = support::legacy_blob(b"sealed before the envelope scheme", "deployment-secret");

    let recovered = vault.open_stored(&blob, Some("deployment-secret")).unwrap();
    assert_eq!(recovered, b"sealed before the envelope scheme");
}

#[test]
fn open_stored_legacy_without_secret_fails() {
    let vault = support::test_vault();
    let blob = support::legacy_blob(b"needs the secret", "deployment-secret");

    let err = vault.open_stored(&blob, None).unwrap_err();
    assert!(matches!(err, VaultError::MalformedPackage(_)));
}

#[test]
fn open_stored_rejects_garbage() {
    let vault = support::test_vault();
    let err = vault.open_stored(b"neither form", None).unwrap_err();
    assert!(matches!(err, VaultError::MalformedPackage(_)));
}

// ── Filesystem Adapters ──

#[test]
fn seal_to_path_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("certificate.enc");
    let vault = support::test_vault();
    let plaintext = b"blob kept out of the primary store";

    let record = vault
        .seal_to_path(plaintext, &dest, &support::document_info())
        .unwrap();

    assert_eq!(record.path, dest);
    assert_eq!(
        std::fs::metadata(&dest).unwrap().len(),
        record.metadata.encrypted_size
    );

    assert_eq!(vault.open_from_path(&record).unwrap(), plaintext);
}

#[test]
fn sealed_file_record_survives_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("license.enc");
    let vault = support::test_vault();

    let record = vault
        .seal_to_path(b"record persisted as JSON", &dest, &support::document_info())
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let restored: docvault_envelope::SealedFileRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(vault.open_from_path(&restored).unwrap(), b"record persisted as JSON");
}

#[test]
fn open_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("present.enc");
    let vault = support::test_vault();

    let mut record = vault
        .seal_to_path(b"data", &dest, &support::document_info())
        .unwrap();
    record.path = dir.path().join("absent.enc");

    let err = vault.open_from_path(&record).unwrap_err();
    assert!(matches!(err, VaultError::Io(_)));
}

#[test]
fn tampered_file_never_opens_to_original() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("tampered.enc");
    let vault = support::test_vault();
    let plaintext = b"integrity via padding only";

    let record = vault
        .seal_to_path(plaintext, &dest, &support::document_info())
        .unwrap();

    let mut bytes = std::fs::read(&dest).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    std::fs::write(&dest, &bytes).unwrap();

    match vault.open_from_path(&record) {
        Err(_) => {}
        // CBC padding can validate by accident; the bytes must still differ
        Ok(recovered) => assert_ne!(recovered, plaintext.to_vec()),
    }
}
