//! Runtime configuration resolved from environment variables.
//!
//! | Variable          | Meaning                                   | Default              |
//! |-------------------|-------------------------------------------|----------------------|
//! | `QUILL_DB_PATH`   | SQLite file for the persistent store      | in-memory store      |
//! | `QUILL_LOG_LEVEL` | `trace\|debug\|info\|warn\|error`         | build-mode default   |
//! | `QUILL_LOG_DIR`   | absolute directory for rolling log files  | file logging off     |
//! | `QUILL_SEED_DEMO` | seed the demo dataset on startup          | `false`              |

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DB_PATH: &str = "QUILL_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "QUILL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "QUILL_LOG_DIR";
pub const ENV_SEED_DEMO: &str = "QUILL_SEED_DEMO";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

/// Which entity store backs the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub store: StoreBackend,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    pub seed_demo: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            log_level: default_log_level(),
            log_dir: None,
            seed_demo: false,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = get(ENV_DB_PATH) {
            config.store = StoreBackend::Sqlite(PathBuf::from(path));
        }

        if let Some(level) = get(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&level).map_err(|err| ConfigError::InvalidValue {
                    var: ENV_LOG_LEVEL,
                    message: err.to_string(),
                })?;
        }

        if let Some(dir) = get(ENV_LOG_DIR) {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    var: ENV_LOG_DIR,
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
            config.log_dir = Some(dir);
        }

        if let Some(flag) = get(ENV_SEED_DEMO) {
            config.seed_demo = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidValue {
                var: ENV_SEED_DEMO,
                message: format!("expected a boolean, got `{flag}`"),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
