// src/service.rs
//! Service façade: one `(method, options)` binding over the pure engine
//!
//! `CipherSpec` is the immutable, validated pair the engine actually runs
//! with. `EncryptionService` keeps the configure-then-use shape callers
//! expect; reconfiguring needs `&mut self`, so a shared instance cannot be
//! reconfigured while another caller is using it.

use tracing::debug;

use crate::core::crypto;
use crate::enums::{CipherMode, EncryptionMethod, PaddingMode};
use crate::error::{CoreError, Result};
use crate::options::AlgorithmOptions;

/// A method that is actually set, plus the options to run it with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSpec {
    method: EncryptionMethod,
    options: AlgorithmOptions,
}

impl CipherSpec {
    /// `None` options selects the method's default
    pub fn new(method: EncryptionMethod, options: Option<AlgorithmOptions>) -> Result<Self> {
        let defaults =
            AlgorithmOptions::default_for(method).ok_or_else(CoreError::method_not_set)?;
        Ok(Self {
            method,
            options: options.unwrap_or(defaults),
        })
    }

    pub fn method(&self) -> EncryptionMethod {
        self.method
    }

    pub fn options(&self) -> &AlgorithmOptions {
        &self.options
    }

    pub fn encrypt(&self, input: &str, key: &str, salt: Option<&str>) -> Result<String> {
        crypto::encrypt_string(input, key, salt, self.method, &self.options)
    }

    pub fn decrypt(&self, input: &str, key: &str, salt: Option<&str>) -> Result<String> {
        crypto::decrypt_string(input, key, salt, self.method, &self.options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncryptionService {
    spec: Option<CipherSpec>,
}

impl EncryptionService {
    /// Unconfigured service; every operation fails until `configure` runs
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured with the method's default options
    pub fn with_method(method: EncryptionMethod) -> Result<Self> {
        let mut service = Self::new();
        service.configure(method, None)?;
        Ok(service)
    }

    pub fn with_options(method: EncryptionMethod, options: AlgorithmOptions) -> Result<Self> {
        let mut service = Self::new();
        service.configure(method, Some(options))?;
        Ok(service)
    }

    /// Bind `method` and `options` (or the method's defaults)
    ///
    /// `NotSet` is rejected and drops any previous binding, so the service
    /// refuses to run until it is configured again.
    pub fn configure(
        &mut self,
        method: EncryptionMethod,
        options: Option<AlgorithmOptions>,
    ) -> Result<&mut Self> {
        let spec = match CipherSpec::new(method, options) {
            Ok(spec) => spec,
            Err(err) => {
                self.spec = None;
                return Err(err);
            }
        };
        debug!(
            %method,
            key_size = spec.options.key_size(),
            "encryption service configured"
        );
        self.spec = Some(spec);
        Ok(self)
    }

    /// Bind `method` with options built from raw values
    pub fn configure_with(
        &mut self,
        method: EncryptionMethod,
        key_size: u32,
        block_size: u32,
        derivation_iterations: u32,
        cipher_mode: CipherMode,
        padding_mode: PaddingMode,
    ) -> Result<&mut Self> {
        let options = AlgorithmOptions::new(
            key_size,
            block_size,
            derivation_iterations,
            cipher_mode,
            padding_mode,
        );
        self.configure(method, Some(options))
    }

    /// `NotSet` until configured
    pub fn method(&self) -> EncryptionMethod {
        self.spec.map(|s| s.method).unwrap_or_default()
    }

    pub fn options(&self) -> Option<&AlgorithmOptions> {
        self.spec.as_ref().map(CipherSpec::options)
    }

    pub fn spec(&self) -> Result<CipherSpec> {
        self.spec.ok_or_else(CoreError::method_not_set)
    }

    pub fn encrypt_string(&self, input: &str, key: &str, salt: Option<&str>) -> Result<String> {
        self.spec()?.encrypt(input, key, salt)
    }

    pub fn decrypt_string(&self, input: &str, key: &str, salt: Option<&str>) -> Result<String> {
        self.spec()?.decrypt(input, key, salt)
    }
}
