//! TOML configuration for an arm feedforward.
//!
//! Loads [`ArmConfig`] from a TOML file and validates it into a
//! [`LoadedConfig`] holding a ready-to-use [`ArmFeedforward`]. A gain set
//! that violates the model invariant surfaces as
//! [`ConfigError::ValidationError`] carrying the model's message.
//!
//! ```toml
//! [shared]
//! log_level = "info"
//! service_name = "shoulder-arm"
//!
//! [gains]
//! ks = 0.2
//! kg = 0.9
//! kv = 1.8
//! ka = 0.05
//!
//! [limits]
//! max_voltage = 12.0
//! ```

use std::path::Path;

use armff_common::config::{ConfigError, ConfigLoader, SharedConfig};
use armff_common::gains::ArmFeedforwardGains;
use armff_common::prelude::DEFAULT_MAX_VOLTAGE;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::feedforward::ArmFeedforward;

/// Supply limits used for achievable-bound queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoltageLimits {
    /// Voltage budget available to the arm motor [V].
    #[serde(default = "default_max_voltage")]
    pub max_voltage: f64,
}

fn default_max_voltage() -> f64 {
    DEFAULT_MAX_VOLTAGE
}

impl Default for VoltageLimits {
    fn default() -> Self {
        Self {
            max_voltage: DEFAULT_MAX_VOLTAGE,
        }
    }
}

impl VoltageLimits {
    /// `max_voltage` must be finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_voltage.is_finite() || self.max_voltage <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "limits.max_voltage must be a finite positive number, got {}",
                self.max_voltage
            )));
        }
        Ok(())
    }
}

/// Raw configuration as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArmConfig {
    pub shared: SharedConfig,
    pub gains: ArmFeedforwardGains,
    #[serde(default)]
    pub limits: VoltageLimits,
}

impl ArmConfig {
    /// Validate every section and build the feedforward model.
    pub fn into_loaded(self) -> Result<LoadedConfig, ConfigError> {
        self.shared.validate()?;
        self.limits.validate()?;
        let feedforward = ArmFeedforward::from_gains(self.gains)?;

        Ok(LoadedConfig {
            shared: self.shared,
            feedforward,
            limits: self.limits,
        })
    }
}

/// Validated configuration bundle, ready for runtime use.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub shared: SharedConfig,
    pub feedforward: ArmFeedforward,
    pub limits: VoltageLimits,
}

/// Load and validate an arm configuration file.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let loaded = ArmConfig::load(path)?.into_loaded()?;
    info!(
        "Loaded arm '{}' from {} (max_voltage={} V)",
        loaded.shared.service_name,
        path.display(),
        loaded.limits.max_voltage
    );
    Ok(loaded)
}

/// Load and validate an arm configuration from an in-memory TOML document.
pub fn load_config_from_str(content: &str) -> Result<LoadedConfig, ConfigError> {
    ArmConfig::load_str(content)?.into_loaded()
}
