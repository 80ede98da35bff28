//! Prelude module for common re-exports.
//!
//! ```rust
//! use armff_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Gains ──────────────────────────────────────────────────────────
pub use crate::gains::ArmFeedforwardGains;
pub use crate::layout::{ArmFeedforwardLayout, LayoutError};

/// Default supply voltage budget [V] used when none is configured.
pub const DEFAULT_MAX_VOLTAGE: f64 = 12.0;
