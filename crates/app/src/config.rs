//! Application configuration.
//!
//! Built once in `main` and passed by reference to whatever needs it; there
//! is no global instance.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockbook_inventory::QuantityPolicy;
use stockbook_observability::TracingConfig;

/// Environment variable naming the JSON config file.
pub const CONFIG_PATH_ENV: &str = "STOCKBOOK_CONFIG";

/// Config file used when `STOCKBOOK_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "stockbook.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SalesSettings {
    pub cart_policy: QuantityPolicy,
}

impl Default for SalesSettings {
    fn default() -> Self {
        Self {
            cart_policy: QuantityPolicy::NonNegative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiningSettings {
    pub cart_policy: QuantityPolicy,
}

impl Default for DiningSettings {
    fn default() -> Self {
        Self {
            cart_policy: QuantityPolicy::StrictlyPositive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: TracingConfig,
    pub sales: SalesSettings,
    pub dining: DiningSettings,
    /// The document as read, for ad-hoc `setting` lookups.
    #[serde(skip)]
    raw: JsonValue,
}

impl AppConfig {
    /// Load from the path in `STOCKBOOK_CONFIG`, or `stockbook.json`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load(path)
    }

    /// Load a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: JsonValue = serde_json::from_str(text)?;
        let mut config: AppConfig = serde_json::from_value(raw.clone())?;
        config.raw = raw;
        Ok(config)
    }

    /// Raw value of `section.name`, if present.
    pub fn setting(&self, section: &str, name: &str) -> Option<&JsonValue> {
        self.raw.get(section)?.get(name)
    }
}
