// tests/core/crypto.rs
use aes::Aes256;
use cipher::block_padding::Pkcs7;
use cipher::{BlockEncryptMut, KeyInit};

use secure_string_cipher::core::*;
use secure_string_cipher::error::CoreError;
use secure_string_cipher::{AlgorithmOptions, CipherMode, EncryptionMethod, PaddingMode};

const KEY: &str = "correct-horse";

fn aes() -> AlgorithmOptions {
    AlgorithmOptions::aes()
}

fn encrypt_aes(input: &str, salt: Option<&str>) -> std::result::Result<String, CoreError> {
    encrypt_string(input, KEY, salt, EncryptionMethod::Aes, &aes())
}

fn decrypt_aes(input: &str, key: &str, salt: Option<&str>) -> std::result::Result<String, CoreError> {
    decrypt_string(input, key, salt, EncryptionMethod::Aes, &aes())
}

#[test]
fn test_hello_world_vector_without_salt() {
    crate::common::setup();

    let encrypted = encrypt_aes("hello world", None).unwrap();

    // salt (16) + iv (16) + one padded block (16) = 48 bytes
    assert_eq!(encrypted.len(), 64);
    assert_eq!(from_base64(&encrypted).unwrap().len(), 48);

    let decrypted = decrypt_aes(&encrypted, KEY, None).unwrap();
    assert_eq!(decrypted, "hello world");
}

#[test]
fn test_hello_world_vector_with_salt() {
    let encrypted = encrypt_aes("hello world", Some("pepper")).unwrap();

    // iv (16) + one padded block (16); the salt is not embedded
    assert_eq!(from_base64(&encrypted).unwrap().len(), 32);
    assert_eq!(encrypted.len(), 44);

    let decrypted = decrypt_aes(&encrypted, KEY, Some("pepper")).unwrap();
    assert_eq!(decrypted, "hello world");
}

#[test]
fn test_whitespace_salt_counts_as_no_salt() {
    let encrypted = encrypt_aes("hello world", Some("   ")).unwrap();
    assert_eq!(from_base64(&encrypted).unwrap().len(), 48);

    // Any blank salt (or none) decrypts it
    assert_eq!(decrypt_aes(&encrypted, KEY, None).unwrap(), "hello world");
    assert_eq!(
        decrypt_aes(&encrypted, KEY, Some("")).unwrap(),
        "hello world"
    );
}

#[test]
fn test_each_encryption_is_unique() {
    let a = encrypt_aes("same input", None).unwrap();
    let b = encrypt_aes("same input", None).unwrap();
    assert_ne!(a, b);

    // Fixed salt still gets a fresh IV every call
    let c = encrypt_aes("same input", Some("s")).unwrap();
    let d = encrypt_aes("same input", Some("s")).unwrap();
    assert_ne!(c, d);
}

#[test]
fn test_empty_plaintext_round_trips() {
    let encrypted = encrypt_aes("", None).unwrap();
    // PKCS7 always adds a block
    assert_eq!(from_base64(&encrypted).unwrap().len(), 48);
    assert_eq!(decrypt_aes(&encrypted, KEY, None).unwrap(), "");
}

#[test]
fn test_decrypt_trims_surrounding_whitespace() {
    let encrypted = encrypt_aes("trim me", None).unwrap();
    let padded = format!("  {encrypted}\n");
    assert_eq!(decrypt_aes(&padded, KEY, None).unwrap(), "trim me");
}

#[test]
fn test_wrong_key_does_not_recover_plaintext() {
    let encrypted = encrypt_aes("top secret", None).unwrap();
    match decrypt_aes(&encrypted, "battery-staple", None) {
        Err(_) => {}
        Ok(text) => assert_ne!(text, "top secret"),
    }
}

#[test]
fn test_salt_mismatch_does_not_recover_plaintext() {
    let encrypted = encrypt_aes("top secret", Some("a")).unwrap();
    match decrypt_aes(&encrypted, KEY, Some("b")) {
        Err(_) => {}
        Ok(text) => assert_ne!(text, "top secret"),
    }
}

#[test]
fn test_not_set_is_rejected() {
    let err = encrypt_string("x", KEY, None, EncryptionMethod::NotSet, &aes()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidEnumArgument {
            field: "EncryptionMethod",
            ..
        }
    ));
    assert!(err.to_string().contains("NotSet"));

    let err = decrypt_string("AAAA", KEY, None, EncryptionMethod::NotSet, &aes()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidEnumArgument { .. }));
}

#[test]
fn test_invalid_base64_input() {
    let err = decrypt_aes("%%% not base64 %%%", KEY, None).unwrap_err();
    assert!(matches!(err, CoreError::Base64(_)));
}

#[test]
fn test_truncated_payload_is_a_cipher_error() {
    // 10 bytes: all salt, no IV, no cipher text
    let short = to_base64(&[0u8; 10]).unwrap();
    let err = decrypt_aes(&short, KEY, None).unwrap_err();
    assert!(matches!(err, CoreError::Cipher(_)));
}

#[test]
fn test_decrypted_bytes_must_be_utf8() {
    // Hand-build a payload whose plaintext is 0xff 0xfe
    let options = AlgorithmOptions::new(256, 128, 5000, CipherMode::Ecb, PaddingMode::Pkcs7);
    let key_byte_size = options.key_byte_size();
    let salt = derive_salt_bytes("s", key_byte_size).unwrap();
    let key = derive_key(KEY, &salt, options.derivation_iterations(), key_byte_size).unwrap();

    let cipher = Aes256::new_from_slice(key.expose_secret()).unwrap();
    let cipher_bytes = cipher.encrypt_padded_vec_mut::<Pkcs7>(&[0xff, 0xfe]);
    let payload = pack(None, &[0u8; 16], &cipher_bytes);
    let encoded = to_base64(&payload).unwrap();

    let result = decrypt_string(&encoded, KEY, Some("s"), EncryptionMethod::Aes, &options);
    assert!(matches!(result, Err(CoreError::Utf8(_))));
}
