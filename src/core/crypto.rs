// src/core/crypto.rs
//! String encryption engine with no I/O and no shared state
//!
//! Turns `(text, passphrase, salt?)` into a self-contained base64 payload
//! and back. Layout: `[salt?][iv][cipher]`, segments sized by the block size.
//!
//! Salt sizing is asymmetric and part of the wire format:
//! - a salt *string* is hashed and truncated to the **key** byte size, and is
//!   not written to the payload (the caller re-supplies it on decrypt);
//! - without a salt string, **block**-size random bytes are generated and
//!   written as the first payload segment.
//!
//! Encrypt and decrypt must see identical method + options. Nothing here
//! pre-validates payload length; a mismatch surfaces as a cipher error.

use tracing::debug;

use crate::core::block::BlockAlgorithm;
use crate::core::encoding::{from_base64, to_base64};
use crate::core::kdf::derive_key;
use crate::core::payload::{extract_cipher_bytes, extract_iv, extract_salt, pack};
use crate::core::util::{derive_salt_bytes, generate_random_bytes, has_value};
use crate::enums::EncryptionMethod;
use crate::error::{CoreError, Result};
use crate::options::AlgorithmOptions;

/// Encrypt `input` → base64 payload
pub fn encrypt_string(
    input: &str,
    key: &str,
    salt: Option<&str>,
    method: EncryptionMethod,
    options: &AlgorithmOptions,
) -> Result<String> {
    BlockAlgorithm::validate(method, options)?;

    let key_byte_size = options.key_byte_size();
    let block_byte_size = options.block_byte_size();
    let supplied_salt = salt.filter(|s| has_value(Some(s)));

    let salt_bytes = match supplied_salt {
        Some(salt) => derive_salt_bytes(salt, key_byte_size)?,
        None => generate_random_bytes(block_byte_size),
    };
    let iv = generate_random_bytes(block_byte_size);

    let derived = derive_key(
        key,
        &salt_bytes,
        options.derivation_iterations(),
        key_byte_size,
    )?;
    let cipher_bytes = BlockAlgorithm::new(method, derived.expose_secret())?.encrypt(
        options.cipher_mode(),
        options.padding_mode(),
        &iv,
        input.as_bytes(),
    )?;

    let embedded_salt = supplied_salt.is_none().then_some(salt_bytes.as_slice());
    let payload = pack(embedded_salt, &iv, &cipher_bytes);

    debug!(
        %method,
        embedded_salt = embedded_salt.is_some(),
        payload_len = payload.len(),
        "string encrypted"
    );

    match to_base64(&payload) {
        Some(encoded) => Ok(encoded),
        None => Err(CoreError::Cipher("cipher produced an empty payload".into())),
    }
}

/// Decrypt a base64 payload produced by [`encrypt_string`] → UTF-8 text
pub fn decrypt_string(
    input: &str,
    key: &str,
    salt: Option<&str>,
    method: EncryptionMethod,
    options: &AlgorithmOptions,
) -> Result<String> {
    BlockAlgorithm::validate(method, options)?;

    let key_byte_size = options.key_byte_size();
    let block_byte_size = options.block_byte_size();
    let supplied_salt = salt.filter(|s| has_value(Some(s)));
    let has_embedded_salt = supplied_salt.is_none();

    let input_bytes = from_base64(input.trim())?;
    let salt_bytes = match supplied_salt {
        Some(salt) => derive_salt_bytes(salt, key_byte_size)?,
        None => extract_salt(&input_bytes, block_byte_size).to_vec(),
    };
    let iv = extract_iv(&input_bytes, block_byte_size, has_embedded_salt);
    let cipher_bytes = extract_cipher_bytes(&input_bytes, block_byte_size, has_embedded_salt);

    let derived = derive_key(
        key,
        &salt_bytes,
        options.derivation_iterations(),
        key_byte_size,
    )?;
    let plaintext = BlockAlgorithm::new(method, derived.expose_secret())?.decrypt(
        options.cipher_mode(),
        options.padding_mode(),
        iv,
        cipher_bytes,
    )?;

    debug!(
        %method,
        embedded_salt = has_embedded_salt,
        payload_len = input_bytes.len(),
        "string decrypted"
    );

    Ok(String::from_utf8(plaintext)?)
}
