//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arm feedforward tool: evaluate a configured gain set
#[derive(Parser, Debug)]
#[command(name = "armff_tool")]
#[command(version)]
#[command(about = "Evaluate arm feedforward voltages and achievable bounds")]
pub struct Args {
    /// Path to the arm configuration TOML.
    #[arg(long, value_name = "FILE", default_value = "config/arm.toml")]
    pub config: PathBuf,

    /// Enable verbose logging (DEBUG level), overriding `shared.log_level`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output logs and results in JSON format.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Continuous feedforward for a position/velocity/acceleration reference.
    Calculate {
        /// Angle from horizontal [rad].
        #[arg(long, allow_negative_numbers = true)]
        position: f64,
        /// Velocity reference [rad/s].
        #[arg(long, allow_negative_numbers = true)]
        velocity: f64,
        /// Acceleration reference [rad/s²].
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        acceleration: f64,
    },

    /// Voltage carrying the arm between two velocity references over `dt`.
    Discrete {
        /// Current angle from horizontal [rad].
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        /// Current velocity reference [rad/s].
        #[arg(long, allow_negative_numbers = true)]
        current_velocity: f64,
        /// Next velocity reference [rad/s].
        #[arg(long, allow_negative_numbers = true)]
        next_velocity: f64,
        /// Time between references [s].
        #[arg(long, allow_negative_numbers = true)]
        dt: f64,
    },

    /// Achievable velocity and acceleration bounds at an angle.
    Bounds {
        /// Angle from horizontal [rad].
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        /// Velocity used for the acceleration bounds [rad/s].
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        velocity: f64,
        /// Acceleration used for the velocity bounds [rad/s²].
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        acceleration: f64,
        /// Voltage budget [V]; defaults to `limits.max_voltage`.
        #[arg(long, allow_negative_numbers = true)]
        max_voltage: Option<f64>,
    },

    /// Packed layout of the configured gain set.
    Layout,
}
