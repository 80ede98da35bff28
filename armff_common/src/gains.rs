//! Named gain record for the arm feedforward model.
//!
//! `ArmFeedforwardGains` is the stable, named form of the four gains. Every
//! serialization layer (TOML config, the packed layout in [`crate::layout`])
//! reads and writes this record; the feedforward model is built from it
//! through a validating constructor.

use serde::{Deserialize, Serialize};

/// The four feedforward gains, in fixed field order `ks, kg, kv, ka`.
///
/// This record carries no invariant on its own. `kv ≥ 0` and `ka ≥ 0` are
/// enforced when the model is constructed from it.
///
/// # TOML Example
///
/// ```toml
/// [gains]
/// ks = 0.2   # V
/// kg = 0.9   # V
/// kv = 1.8   # V/(rad/s)
/// ka = 0.05  # V/(rad/s²), optional
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArmFeedforwardGains {
    /// Static friction gain [V].
    pub ks: f64,
    /// Gravity gain [V].
    pub kg: f64,
    /// Velocity gain [V/(rad/s)].
    pub kv: f64,
    /// Acceleration gain [V/(rad/s²)]. Defaults to zero.
    #[serde(default)]
    pub ka: f64,
}

impl ArmFeedforwardGains {
    /// Field names in layout order.
    pub const FIELD_NAMES: [&'static str; 4] = ["ks", "kg", "kv", "ka"];

    /// Build a record from the four gains.
    #[inline]
    pub const fn new(ks: f64, kg: f64, kv: f64, ka: f64) -> Self {
        Self { ks, kg, kv, ka }
    }

    /// Gains as an array in layout order.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.ks, self.kg, self.kv, self.ka]
    }

    /// Build a record from an array in layout order.
    #[inline]
    pub const fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}
