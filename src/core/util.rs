//! Small utility functions used across the core module
//!
//! Randomness, SHA-256 helpers and the "does this string carry a value"
//! check that decides whether a salt was supplied.

use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

use crate::consts::{RANDOM_STRING_CHARS, SHA256_DIGEST_LEN};
use crate::error::{CoreError, Result};

/// `count` bytes from the thread-local CSPRNG
pub fn generate_random_bytes(count: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; count];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// SHA-256 of the UTF-8 bytes of `salt`, truncated to `length` bytes.
///
/// `length == 0` returns the whole digest. Lengths past the digest size are
/// rejected rather than zero-extended.
pub fn derive_salt_bytes(salt: &str, length: usize) -> Result<Vec<u8>> {
    let digest = Sha256::digest(salt.as_bytes());
    if length == 0 {
        return Ok(digest.to_vec());
    }
    if length > SHA256_DIGEST_LEN {
        return Err(CoreError::invalid_argument(
            "length",
            format!(
                "cannot take {length} bytes from a {SHA256_DIGEST_LEN}-byte SHA-256 digest"
            ),
        ));
    }
    Ok(digest[..length].to_vec())
}

/// Lowercase hex SHA-256 of a string
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// True when `value` is present and has at least one non-whitespace char
pub fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.chars().any(|c| !c.is_whitespace()))
}

/// Random printable-ASCII string. Not for key material.
pub fn generate_random_string(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(rng.random_range(RANDOM_STRING_CHARS)))
        .collect()
}
