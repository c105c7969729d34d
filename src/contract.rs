// src/contract.rs
//! Wire-level request/response objects
//!
//! Field names are camelCase JSON. Enum fields travel as strings and are
//! parsed leniently (see `crate::enums`).

use serde::{Deserialize, Serialize};

use crate::consts::{CONTENT_TYPE_TEXT, STATUS_OK};
use crate::core::util::sha256_hex;
use crate::enums::{CipherMode, EncryptionMethod, EncryptionOperation, PaddingMode};
use crate::options::AlgorithmOptions;

/// Optional overrides; absent fields fall back to the method's defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionOptionsContract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivation_iterations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_mode: Option<CipherMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_mode: Option<PaddingMode>,
}

impl EncryptionOptionsContract {
    /// Fill gaps from `method`'s defaults. `None` when `method` is `NotSet`.
    pub fn resolve(&self, method: EncryptionMethod) -> Option<AlgorithmOptions> {
        let defaults = AlgorithmOptions::default_for(method)?;
        Some(AlgorithmOptions::new(
            self.key_size.unwrap_or(defaults.key_size()),
            self.block_size.unwrap_or(defaults.block_size()),
            self.derivation_iterations
                .unwrap_or(defaults.derivation_iterations()),
            self.cipher_mode.unwrap_or(defaults.cipher_mode()),
            self.padding_mode.unwrap_or(defaults.padding_mode()),
        ))
    }
}

impl From<AlgorithmOptions> for EncryptionOptionsContract {
    fn from(options: AlgorithmOptions) -> Self {
        Self {
            key_size: Some(options.key_size()),
            block_size: Some(options.block_size()),
            derivation_iterations: Some(options.derivation_iterations()),
            cipher_mode: Some(options.cipher_mode()),
            padding_mode: Some(options.padding_mode()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionContract {
    pub value: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    pub encryption_operation: EncryptionOperation,
    #[serde(default)]
    pub encryption_method: EncryptionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_options: Option<EncryptionOptionsContract>,
}

impl EncryptionContract {
    pub fn new(
        operation: EncryptionOperation,
        method: EncryptionMethod,
        value: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            key: key.into(),
            salt: None,
            encryption_operation: operation,
            encryption_method: method,
            encryption_options: None,
        }
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn with_options(mut self, options: impl Into<EncryptionOptionsContract>) -> Self {
        self.encryption_options = Some(options.into());
        self
    }

    /// Producer-side encrypt request. The raw key and salt never leave the
    /// producer; their SHA-256 hex digests are sent instead.
    pub fn encrypt_request(
        value: impl Into<String>,
        raw_key: &str,
        raw_salt: Option<&str>,
        method: EncryptionMethod,
    ) -> Self {
        Self::hashed(
            EncryptionOperation::Encrypt,
            value,
            raw_key,
            raw_salt,
            method,
        )
    }

    /// Producer-side decrypt request; hashes key and salt like
    /// [`encrypt_request`](Self::encrypt_request) so both sides agree.
    pub fn decrypt_request(
        value: impl Into<String>,
        raw_key: &str,
        raw_salt: Option<&str>,
        method: EncryptionMethod,
    ) -> Self {
        Self::hashed(
            EncryptionOperation::Decrypt,
            value,
            raw_key,
            raw_salt,
            method,
        )
    }

    fn hashed(
        operation: EncryptionOperation,
        value: impl Into<String>,
        raw_key: &str,
        raw_salt: Option<&str>,
        method: EncryptionMethod,
    ) -> Self {
        let mut contract = Self::new(operation, method, value, sha256_hex(raw_key));
        contract.salt = raw_salt.map(sha256_hex);
        contract
    }

    /// Contract → the values a service call needs
    pub fn to_request(&self) -> EncryptionRequest {
        let method = self.encryption_method;
        EncryptionRequest {
            value: self.value.clone(),
            key: self.key.clone(),
            salt: self.salt.clone(),
            method,
            options: self
                .encryption_options
                .as_ref()
                .and_then(|options| options.resolve(method)),
        }
    }
}

/// A contract mapped onto the service layer's vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionRequest {
    pub value: String,
    pub key: String,
    pub salt: Option<String>,
    pub method: EncryptionMethod,
    pub options: Option<AlgorithmOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_code: u16,
    pub response_type: String,
}

impl EncryptionResponse {
    pub fn success(message: Option<String>) -> Self {
        Self {
            message,
            response_code: STATUS_OK,
            response_type: CONTENT_TYPE_TEXT.to_owned(),
        }
    }

    pub fn failure(response_code: u16, response_type: &str, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            response_code,
            response_type: response_type.to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == STATUS_OK
    }
}
