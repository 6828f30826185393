use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "MediFit";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_STATEMENT_TIMEOUT_MS: u64 = 5_000;
const DATABASE_FILE: &str = "medifit.db";

pub const ENV_DATABASE_PATH: &str = "MEDIFIT_DATABASE_PATH";
pub const ENV_STATEMENT_TIMEOUT_MS: &str = "MEDIFIT_STATEMENT_TIMEOUT_MS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Get the application data directory (~/MediFit/).
/// Falls back to the working directory when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn default_database_path() -> PathBuf {
    app_data_dir().join(DATABASE_FILE)
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "medifit_lib=info,warn"
}

/// Where the clinic database lives and how long one operation may take.
///
/// `statement_timeout_ms` bounds both lock waits (SQLite busy timeout) and
/// statement execution; an operation still running past it is interrupted.
/// Zero disables the execution bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub database_path: PathBuf,
    pub statement_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            statement_timeout_ms: DEFAULT_STATEMENT_TIMEOUT_MS,
        }
    }
}

impl SessionConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `MEDIFIT_DATABASE_PATH` / `MEDIFIT_STATEMENT_TIMEOUT_MS` from the environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup(ENV_DATABASE_PATH) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_STATEMENT_TIMEOUT_MS) {
            self.statement_timeout_ms =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_STATEMENT_TIMEOUT_MS.into(),
                    value: raw.clone(),
                })?;
        }
        Ok(self)
    }

    pub fn statement_timeout(&self) -> Duration {
        Duration::from_millis(self.statement_timeout_ms)
    }
}
