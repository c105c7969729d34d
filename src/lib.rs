// src/lib.rs
//! secure-string-cipher: passphrase-based symmetric encryption of strings
//!
//! Features:
//! - AES, DES, RC2 and TripleDES with PBKDF2-HMAC-SHA256 key derivation
//! - Self-contained base64 payloads: `[salt?][iv][cipher]`
//! - Configurable façade, factory and async orchestrator with cancellation
//! - Bus-style consumer that always answers with a response object

pub mod aliases;
pub mod cancellation;
pub mod config;
pub mod consts;
pub mod consumer;
pub mod contract;
pub mod core;
pub mod enums;
pub mod factory;
pub mod options;
pub mod orchestrator;
pub mod service;

pub mod error;

// Re-export everything users need at the crate root
pub use cancellation::CancellationToken;
pub use config::load as load_config;
pub use consumer::{EncryptionConsumer, Responder};
pub use contract::{EncryptionContract, EncryptionOptionsContract, EncryptionResponse};
pub use enums::{CipherMode, EncryptionMethod, EncryptionOperation, PaddingMode};
pub use error::{CoreError, Result};
pub use factory::EncryptionServiceFactory;
pub use options::AlgorithmOptions;
pub use orchestrator::EncryptionOrchestrator;
pub use service::{CipherSpec, EncryptionService};
