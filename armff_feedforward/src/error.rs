//! Error type for the feedforward model.
//!
//! A single kind: invalid argument. Raised for negative `kv`/`ka` at
//! construction and for a non-positive `dt` at discrete evaluation.

use armff_common::config::ConfigError;
use thiserror::Error;

/// Error raised by [`crate::ArmFeedforward`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FeedforwardError {
    /// A parameter is outside its valid domain.
    #[error("invalid argument: {parameter} must be {requirement}, got {value}")]
    InvalidArgument {
        /// Name of the offending gain or argument.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable domain, e.g. "a non-negative number".
        requirement: &'static str,
    },
}

impl FeedforwardError {
    pub(crate) const fn negative_gain(parameter: &'static str, value: f64) -> Self {
        Self::InvalidArgument {
            parameter,
            value,
            requirement: "a non-negative number",
        }
    }

    pub(crate) const fn non_positive_dt(value: f64) -> Self {
        Self::InvalidArgument {
            parameter: "dt",
            value,
            requirement: "a positive number of seconds",
        }
    }

    /// Name of the offending parameter.
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => *parameter,
        }
    }

    /// The rejected value.
    pub const fn value(&self) -> f64 {
        match self {
            Self::InvalidArgument { value, .. } => *value,
        }
    }
}

impl From<FeedforwardError> for ConfigError {
    fn from(e: FeedforwardError) -> Self {
        ConfigError::ValidationError(e.to_string())
    }
}
