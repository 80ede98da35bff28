//! TOML configuration for arm tools.
//!
//! Every application file carries a `[shared]` table ([`SharedConfig`]) next
//! to its own tables; any `Deserialize` type loads through [`ConfigLoader`].
//!
//! ```rust,no_run
//! use armff_common::config::{ConfigLoader, SharedConfig, ConfigError};
//! use armff_common::gains::ArmFeedforwardGains;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct ArmToolConfig {
//!     shared: SharedConfig,
//!     gains: ArmFeedforwardGains,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = ArmToolConfig::load(Path::new("arm.toml"))?;
//!     println!("Arm: {} (kg = {})", config.shared.service_name, config.gains.kg);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable arm configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("arm config {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("arm config {} unreadable: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// Bad TOML, a wrong field type or an unknown gain name.
    #[error("arm config parse error: {0}")]
    ParseError(String),

    /// Well-formed but physically invalid, e.g. a negative `kv`.
    #[error("arm config rejected: {0}")]
    ValidationError(String),
}

/// `shared.log_level`, written in lowercase in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-iteration residuals of the discrete solver.
    Trace,
    /// Model construction and solver fallbacks.
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// The `[shared]` table.
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "shoulder-arm"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    #[serde(default)]
    pub log_level: LogLevel,

    /// Joint or mechanism the gains belong to; shows up in logs.
    pub service_name: String,
}

impl SharedConfig {
    /// # Errors
    /// [`ConfigError::ValidationError`] if `service_name` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "shared.service_name is blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// TOML loading for any `DeserializeOwned` type.
///
/// Only syntax and field types are checked here; range checks such as
/// non-negative gains belong to the type that owns the invariant.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Read and parse `path`.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        Self::load_str(&content)
    }

    /// Parse an in-memory TOML document.
    fn load_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
