// tests/core/util.rs
use secure_string_cipher::core::*;
use secure_string_cipher::error::CoreError;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn test_sha256_hex_known_vectors() {
    assert_eq!(sha256_hex("abc"), ABC_SHA256);
    assert_eq!(
        sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_hex_is_64_chars_lowercase() {
    let hex = sha256_hex("hello world");
    assert_eq!(hex.len(), 64);
    assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
}

#[test]
fn test_derive_salt_bytes_truncates_digest() {
    let salt = derive_salt_bytes("abc", 4).unwrap();
    assert_eq!(salt, vec![0xba, 0x78, 0x16, 0xbf]);

    let full = derive_salt_bytes("abc", 32).unwrap();
    assert_eq!(hex::encode(&full), ABC_SHA256);
}

#[test]
fn test_derive_salt_bytes_zero_length_keeps_full_digest() {
    let salt = derive_salt_bytes("abc", 0).unwrap();
    assert_eq!(salt.len(), 32);
    assert_eq!(hex::encode(&salt), ABC_SHA256);
}

#[test]
fn test_derive_salt_bytes_is_deterministic() {
    let a = derive_salt_bytes("pepper", 24).unwrap();
    let b = derive_salt_bytes("pepper", 24).unwrap();
    let c = derive_salt_bytes("paprika", 24).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_derive_salt_bytes_rejects_length_past_digest() {
    let err = derive_salt_bytes("abc", 33).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidArgument {
            name: "length",
            ..
        }
    ));
}

#[test]
fn test_generate_random_bytes_length_and_uniqueness() {
    let a = generate_random_bytes(16);
    let b = generate_random_bytes(16);
    assert_eq!(a.len(), 16);
    assert_ne!(a, b);
    assert!(generate_random_bytes(0).is_empty());
}

#[test]
fn test_has_value() {
    assert!(has_value(Some("salt")));
    assert!(has_value(Some("  x  ")));
    assert!(!has_value(Some("")));
    assert!(!has_value(Some(" \t\n ")));
    assert!(!has_value(None));
}

#[test]
fn test_generate_random_string_is_printable_ascii() {
    let s = generate_random_string(256);
    assert_eq!(s.len(), 256);
    assert!(s.bytes().all(|b| (33..=126).contains(&b)));
    assert_ne!(s, generate_random_string(256));
}
