//! Evaluation of a [`Command`] against a loaded configuration.

use std::fmt;

use armff_common::layout::ArmFeedforwardLayout;
use armff_feedforward::FeedforwardError;
use armff_feedforward::config::LoadedConfig;
use serde::Serialize;

use crate::cli::Command;

/// Result of one command, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Calculate {
        position: f64,
        velocity: f64,
        acceleration: f64,
        voltage: f64,
    },
    Discrete {
        angle: f64,
        current_velocity: f64,
        next_velocity: f64,
        dt: f64,
        voltage: f64,
    },
    Bounds {
        angle: f64,
        max_voltage: f64,
        velocity: f64,
        acceleration: f64,
        max_velocity: f64,
        min_velocity: f64,
        max_acceleration: f64,
        min_acceleration: f64,
    },
    Layout {
        type_name: &'static str,
        schema: &'static str,
        bytes: String,
    },
}

pub fn evaluate(command: Command, loaded: &LoadedConfig) -> Result<Report, FeedforwardError> {
    let ff = &loaded.feedforward;

    let report = match command {
        Command::Calculate {
            position,
            velocity,
            acceleration,
        } => Report::Calculate {
            position,
            velocity,
            acceleration,
            voltage: ff.calculate_with_acceleration(position, velocity, acceleration),
        },
        Command::Discrete {
            angle,
            current_velocity,
            next_velocity,
            dt,
        } => Report::Discrete {
            angle,
            current_velocity,
            next_velocity,
            dt,
            voltage: ff.calculate_discrete(angle, current_velocity, next_velocity, dt)?,
        },
        Command::Bounds {
            angle,
            velocity,
            acceleration,
            max_voltage,
        } => {
            let max_voltage = max_voltage.unwrap_or(loaded.limits.max_voltage);
            Report::Bounds {
                angle,
                max_voltage,
                velocity,
                acceleration,
                max_velocity: ff.max_achievable_velocity(max_voltage, angle, acceleration),
                min_velocity: ff.min_achievable_velocity(max_voltage, angle, acceleration),
                max_acceleration: ff.max_achievable_acceleration(max_voltage, angle, velocity),
                min_acceleration: ff.min_achievable_acceleration(max_voltage, angle, velocity),
            }
        }
        Command::Layout => Report::Layout {
            type_name: ArmFeedforwardLayout::TYPE_NAME,
            schema: ArmFeedforwardLayout::SCHEMA,
            bytes: ArmFeedforwardLayout::from(ff.gains())
                .pack()
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect(),
        },
    };

    Ok(report)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculate { voltage, .. } | Self::Discrete { voltage, .. } => {
                write!(f, "voltage: {voltage:.6} V")
            }
            Self::Bounds {
                max_voltage,
                max_velocity,
                min_velocity,
                max_acceleration,
                min_acceleration,
                ..
            } => {
                writeln!(f, "budget:           {max_voltage:.3} V")?;
                writeln!(f, "max velocity:     {max_velocity:.6} rad/s")?;
                writeln!(f, "min velocity:     {min_velocity:.6} rad/s")?;
                writeln!(f, "max acceleration: {max_acceleration:.6} rad/s²")?;
                write!(f, "min acceleration: {min_acceleration:.6} rad/s²")
            }
            Self::Layout {
                type_name,
                schema,
                bytes,
            } => {
                writeln!(f, "type:   {type_name}")?;
                writeln!(f, "schema: {schema}")?;
                write!(f, "bytes:  {bytes}")
            }
        }
    }
}
