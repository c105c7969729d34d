// tests/core/kdf.rs
use secure_string_cipher::core::derive_key;
use secure_string_cipher::error::CoreError;

// PBKDF2-HMAC-SHA256("password", "salt", 1, 32)
const PASSWORD_SALT_C1: &str = "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b";

#[test]
fn test_derive_key_known_vector() {
    let key = derive_key("password", b"salt", 1, 32).unwrap();
    assert_eq!(hex::encode(key.expose_secret()), PASSWORD_SALT_C1);
}

#[test]
fn test_derive_key_truncates_to_key_size() {
    let key = derive_key("password", b"salt", 1, 16).unwrap();
    assert_eq!(key.expose_secret().len(), 16);
    assert_eq!(hex::encode(key.expose_secret()), &PASSWORD_SALT_C1[..32]);
}

#[test]
fn test_derive_key_depends_on_every_input() {
    let base = derive_key("pass", b"salt", 10, 32).unwrap();
    let again = derive_key("pass", b"salt", 10, 32).unwrap();
    let other_pass = derive_key("pasS", b"salt", 10, 32).unwrap();
    let other_salt = derive_key("pass", b"sal7", 10, 32).unwrap();
    let other_iter = derive_key("pass", b"salt", 11, 32).unwrap();

    assert_eq!(base.expose_secret(), again.expose_secret());
    assert_ne!(base.expose_secret(), other_pass.expose_secret());
    assert_ne!(base.expose_secret(), other_salt.expose_secret());
    assert_ne!(base.expose_secret(), other_iter.expose_secret());
}

#[test]
fn test_derive_key_rejects_zero_iterations_and_size() {
    assert!(matches!(
        derive_key("pass", b"salt", 0, 32),
        Err(CoreError::InvalidOptions(_))
    ));
    assert!(matches!(
        derive_key("pass", b"salt", 1, 0),
        Err(CoreError::InvalidOptions(_))
    ));
}
