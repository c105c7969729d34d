// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub orchestrator: OrchestratorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrchestratorConfig {
    /// Upper bound on cipher passes running at once
    #[serde(default = "default_max_concurrent_operations")]
    pub max_concurrent_operations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            orchestrator: default_orchestrator(),
            logging: default_logging(),
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        default_orchestrator()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        default_logging()
    }
}

impl OrchestratorConfig {
    /// Semaphore size; never zero so the orchestrator cannot stall
    pub fn permits(&self) -> usize {
        self.max_concurrent_operations.max(1)
    }
}

impl Config {
    /// Parse a TOML document; missing tables and keys take defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `SSC_MAX_CONCURRENCY` / `SSC_LOG` from `lookup`
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MAX_CONCURRENCY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.orchestrator.max_concurrent_operations = n,
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid max concurrency override");
                }
            }
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            self.logging.filter = filter;
        }
    }
}

/// Read and parse a config file, without env overrides
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml(&content)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, loaded once; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            load_from(&config_path).unwrap_or_else(|e| {
                warn!(path = %config_path, error = %e, "invalid config, using built-in defaults");
                Config::default()
            })
        } else {
            warn!(path = %config_path, "config not found, using built-in defaults");
            Config::default()
        };

        conf.apply_overrides(|name| std::env::var(name).ok());

        conf
    })
}
