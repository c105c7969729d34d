// src/options.rs
//! Per-algorithm parameter bundles
//!
//! Options are plain values: nothing is validated here. A key size the
//! cipher cannot use is reported by the engine when an operation runs.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::enums::{CipherMode, EncryptionMethod, PaddingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmOptions {
    key_size: u32,
    block_size: u32,
    derivation_iterations: u32,
    cipher_mode: CipherMode,
    padding_mode: PaddingMode,
}

impl AlgorithmOptions {
    pub const fn new(
        key_size: u32,
        block_size: u32,
        derivation_iterations: u32,
        cipher_mode: CipherMode,
        padding_mode: PaddingMode,
    ) -> Self {
        Self {
            key_size,
            block_size,
            derivation_iterations,
            cipher_mode,
            padding_mode,
        }
    }

    pub const fn aes() -> Self {
        Self::new(
            AES_DEFAULT_KEY_SIZE,
            AES_DEFAULT_BLOCK_SIZE,
            DEFAULT_DERIVATION_ITERATIONS,
            CipherMode::Cbc,
            PaddingMode::Pkcs7,
        )
    }

    pub const fn des() -> Self {
        Self::new(
            DES_DEFAULT_KEY_SIZE,
            DES_DEFAULT_BLOCK_SIZE,
            DEFAULT_DERIVATION_ITERATIONS,
            CipherMode::Cbc,
            PaddingMode::Pkcs7,
        )
    }

    pub const fn rc2() -> Self {
        Self::new(
            RC2_DEFAULT_KEY_SIZE,
            RC2_DEFAULT_BLOCK_SIZE,
            DEFAULT_DERIVATION_ITERATIONS,
            CipherMode::Cbc,
            PaddingMode::Pkcs7,
        )
    }

    pub const fn triple_des() -> Self {
        Self::new(
            TRIPLE_DES_DEFAULT_KEY_SIZE,
            TRIPLE_DES_DEFAULT_BLOCK_SIZE,
            DEFAULT_DERIVATION_ITERATIONS,
            CipherMode::Cbc,
            PaddingMode::Pkcs7,
        )
    }

    /// The documented default for `method`; `None` for `NotSet`
    pub const fn default_for(method: EncryptionMethod) -> Option<Self> {
        match method {
            EncryptionMethod::Aes => Some(Self::aes()),
            EncryptionMethod::Des => Some(Self::des()),
            EncryptionMethod::Rc2 => Some(Self::rc2()),
            EncryptionMethod::TripleDes => Some(Self::triple_des()),
            EncryptionMethod::NotSet => None,
        }
    }

    /// Key size in bits
    pub const fn key_size(&self) -> u32 {
        self.key_size
    }

    /// Block size in bits
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    pub const fn derivation_iterations(&self) -> u32 {
        self.derivation_iterations
    }

    pub const fn cipher_mode(&self) -> CipherMode {
        self.cipher_mode
    }

    pub const fn padding_mode(&self) -> PaddingMode {
        self.padding_mode
    }

    pub const fn key_byte_size(&self) -> usize {
        (self.key_size / 8) as usize
    }

    pub const fn block_byte_size(&self) -> usize {
        (self.block_size / 8) as usize
    }
}
