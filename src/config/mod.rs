// src/config/mod.rs
//! Configuration system for secure-string-cipher
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, Config, LoggingConfig, OrchestratorConfig};
pub use defaults::{CONFIG_ENV, CONFIG_FILE, LOG_ENV, MAX_CONCURRENCY_ENV};

mod app;
mod defaults;
