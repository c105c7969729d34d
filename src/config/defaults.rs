// src/config/defaults.rs
use crate::config::app::{LoggingConfig, OrchestratorConfig};

pub const CONFIG_ENV: &str = "SSC_CONFIG";
pub const CONFIG_FILE: &str = "string-cipher.toml";
pub const MAX_CONCURRENCY_ENV: &str = "SSC_MAX_CONCURRENCY";
pub const LOG_ENV: &str = "SSC_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const FALLBACK_CONCURRENCY: usize = 4;

pub fn default_orchestrator() -> OrchestratorConfig {
    OrchestratorConfig {
        max_concurrent_operations: default_max_concurrent_operations(),
    }
}

/// One in-flight cipher pass per core
pub fn default_max_concurrent_operations() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_CONCURRENCY)
}

pub fn default_logging() -> LoggingConfig {
    LoggingConfig {
        filter: default_log_filter(),
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
