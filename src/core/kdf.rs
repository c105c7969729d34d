//! Passphrase → key derivation (PBKDF2-HMAC-SHA256)

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::aliases::DerivedKey;
use crate::error::{CoreError, Result};

/// Derive `key_byte_size` bytes from the UTF-8 passphrase and salt.
///
/// Same `(passphrase, salt, iterations, key_byte_size)` always yields the
/// same key; round-trips depend on it.
pub fn derive_key(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
    key_byte_size: usize,
) -> Result<DerivedKey> {
    if iterations == 0 {
        return Err(CoreError::InvalidOptions(
            "derivation iterations must be positive".into(),
        ));
    }
    if key_byte_size == 0 {
        return Err(CoreError::InvalidOptions(
            "key size must be positive".into(),
        ));
    }

    let mut key = vec![0u8; key_byte_size];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut key);
    Ok(DerivedKey::new(key))
}
