// src/factory.rs
//! Resolves configured `EncryptionService` instances
//!
//! The factory owns a constructor closure instead of reaching into a global
//! registry. Hosts that pool or wrap services inject their own; the default
//! builds a fresh unconfigured service.

use std::fmt;
use std::sync::Arc;

use crate::enums::EncryptionMethod;
use crate::error::Result;
use crate::options::AlgorithmOptions;
use crate::service::EncryptionService;

pub type ServiceConstructor = Arc<dyn Fn() -> EncryptionService + Send + Sync>;

#[derive(Clone)]
pub struct EncryptionServiceFactory {
    constructor: ServiceConstructor,
}

impl Default for EncryptionServiceFactory {
    fn default() -> Self {
        Self::with_constructor(EncryptionService::new)
    }
}

impl fmt::Debug for EncryptionServiceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionServiceFactory")
            .finish_non_exhaustive()
    }
}

impl EncryptionServiceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constructor<F>(constructor: F) -> Self
    where
        F: Fn() -> EncryptionService + Send + Sync + 'static,
    {
        Self {
            constructor: Arc::new(constructor),
        }
    }

    /// Fresh service bound to `method`, bypassing the injected constructor
    pub fn create_service(
        &self,
        method: EncryptionMethod,
        options: Option<AlgorithmOptions>,
    ) -> Result<EncryptionService> {
        let mut service = EncryptionService::new();
        service.configure(method, options)?;
        Ok(service)
    }

    /// Service from the injected constructor, then configured
    pub fn get_service(
        &self,
        method: EncryptionMethod,
        options: Option<AlgorithmOptions>,
    ) -> Result<EncryptionService> {
        let mut service = (self.constructor)();
        service.configure(method, options)?;
        Ok(service)
    }
}
