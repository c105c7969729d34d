// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which algorithm, which
//! operation, and which block-cipher mode / padding scheme.
//!
//! All of them travel as strings on the wire and are matched
//! case-insensitively, mirroring how request objects are produced upstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported symmetric algorithms
///
/// `NotSet` is the "service not configured" sentinel. Unknown names coming
/// off the wire also land here, so the façade rejects them with a
/// configuration error instead of the deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EncryptionMethod {
    #[default]
    NotSet,
    Aes,
    Des,
    Rc2,
    TripleDes,
}

impl EncryptionMethod {
    pub const ALL: [EncryptionMethod; 4] = [
        EncryptionMethod::Aes,
        EncryptionMethod::Des,
        EncryptionMethod::Rc2,
        EncryptionMethod::TripleDes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionMethod::NotSet => "NotSet",
            EncryptionMethod::Aes => "AES",
            EncryptionMethod::Des => "DES",
            EncryptionMethod::Rc2 => "RC2",
            EncryptionMethod::TripleDes => "TripleDES",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, EncryptionMethod::NotSet)
    }
}

impl From<&str> for EncryptionMethod {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "aes" => EncryptionMethod::Aes,
            "des" => EncryptionMethod::Des,
            "rc2" => EncryptionMethod::Rc2,
            "tripledes" | "3des" => EncryptionMethod::TripleDes,
            _ => EncryptionMethod::NotSet,
        }
    }
}

impl From<String> for EncryptionMethod {
    fn from(value: String) -> Self {
        EncryptionMethod::from(value.as_str())
    }
}

impl From<EncryptionMethod> for String {
    fn from(value: EncryptionMethod) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for EncryptionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which direction a request wants to go
///
/// Values that are neither `Encrypt` nor `Decrypt` are kept verbatim so the
/// dispatcher can report exactly what it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EncryptionOperation {
    Encrypt,
    Decrypt,
    Unrecognized(String),
}

impl EncryptionOperation {
    pub fn as_str(&self) -> &str {
        match self {
            EncryptionOperation::Encrypt => "Encrypt",
            EncryptionOperation::Decrypt => "Decrypt",
            EncryptionOperation::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for EncryptionOperation {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "encrypt" => EncryptionOperation::Encrypt,
            "decrypt" => EncryptionOperation::Decrypt,
            _ => EncryptionOperation::Unrecognized(value),
        }
    }
}

impl From<EncryptionOperation> for String {
    fn from(value: EncryptionOperation) -> Self {
        match value {
            EncryptionOperation::Unrecognized(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for EncryptionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block-cipher chaining modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CipherMode {
    Cbc,
    Ecb,
    Ofb,
    /// 8-bit feedback
    Cfb,
    Cts,
}

impl CipherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Cbc => "CBC",
            CipherMode::Ecb => "ECB",
            CipherMode::Ofb => "OFB",
            CipherMode::Cfb => "CFB",
            CipherMode::Cts => "CTS",
        }
    }
}

impl FromStr for CipherMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CBC" => Ok(CipherMode::Cbc),
            "ECB" => Ok(CipherMode::Ecb),
            "OFB" => Ok(CipherMode::Ofb),
            "CFB" => Ok(CipherMode::Cfb),
            "CTS" => Ok(CipherMode::Cts),
            _ => Err(CoreError::InvalidEnumArgument {
                field: "cipher_mode",
                value: s.to_owned(),
                expected: "CipherMode",
            }),
        }
    }
}

impl TryFrom<String> for CipherMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CipherMode> for String {
    fn from(value: CipherMode) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding schemes for extending plaintext to the block size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaddingMode {
    None,
    Pkcs7,
    Zeros,
    AnsiX923,
    Iso10126,
}

impl PaddingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddingMode::None => "None",
            PaddingMode::Pkcs7 => "PKCS7",
            PaddingMode::Zeros => "Zeros",
            PaddingMode::AnsiX923 => "ANSIX923",
            PaddingMode::Iso10126 => "ISO10126",
        }
    }
}

impl FromStr for PaddingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(PaddingMode::None),
            "PKCS7" => Ok(PaddingMode::Pkcs7),
            "ZEROS" => Ok(PaddingMode::Zeros),
            "ANSIX923" => Ok(PaddingMode::AnsiX923),
            "ISO10126" => Ok(PaddingMode::Iso10126),
            _ => Err(CoreError::InvalidEnumArgument {
                field: "padding_mode",
                value: s.to_owned(),
                expected: "PaddingMode",
            }),
        }
    }
}

impl TryFrom<String> for PaddingMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaddingMode> for String {
    fn from(value: PaddingMode) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
