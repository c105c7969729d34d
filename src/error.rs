// src/error.rs
//! Public error type for the entire crate

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// An enum value the operation cannot work with (e.g. `EncryptionMethod::NotSet`)
    #[error("The value of argument '{field}' ({value}) is invalid for Enum type '{expected}'.")]
    InvalidEnumArgument {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Sizes, iteration counts or modes the selected cipher cannot honour
    #[error("Invalid algorithm options: {0}")]
    InvalidOptions(String),

    #[error("Crypto operation failed: {0}")]
    Cipher(String),

    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decrypted data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{message}")]
    Cancelled {
        message: String,
        data: BTreeMap<String, String>,
    },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Worker pool is closed: {0}")]
    PoolClosed(#[from] tokio::sync::AcquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Raised by every operation attempted against `EncryptionMethod::NotSet`
    pub(crate) fn method_not_set() -> Self {
        CoreError::InvalidEnumArgument {
            field: "EncryptionMethod",
            value: "NotSet".into(),
            expected: "EncryptionMethod",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CoreError::Cancelled { .. })
    }
}

impl From<cipher::InvalidLength> for CoreError {
    fn from(_: cipher::InvalidLength) -> Self {
        CoreError::Cipher(
            "key or IV has an invalid length for the selected cipher".into(),
        )
    }
}

impl From<cipher::block_padding::UnpadError> for CoreError {
    fn from(_: cipher::block_padding::UnpadError) -> Self {
        CoreError::Cipher("padding is invalid and cannot be removed".into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
