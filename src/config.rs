use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::version::{SortOptions, SortOrder};

/// Default log level when neither the config file nor RUST_LOG set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub sort: SortConfig,
    pub log: LogConfig,
}

/// Defaults for the `sort` command
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SortConfig {
    pub descending: bool,
    pub skip_invalid: bool,
    pub dedup: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            descending: true,
            skip_invalid: false,
            dedup: false,
        }
    }
}

impl SortConfig {
    pub fn to_options(&self) -> SortOptions {
        SortOptions {
            order: if self.descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            skip_invalid: self.skip_invalid,
            dedup: self.dedup,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "debug" or "vercmp=trace"
    pub level: String,
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to `Config::default()` when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config file at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for vercmp.
/// Uses $XDG_CONFIG_HOME/vercmp if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/vercmp,
/// or ./vercmp if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("vercmp")
}
