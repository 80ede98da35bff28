//! # Arm Feedforward Tool
//!
//! Loads a gain set from TOML and evaluates the arm feedforward model from
//! the command line: continuous and discrete voltages, achievable bounds,
//! and the packed layout of the gains.
//!
//! ```text
//! armff_tool --config config/arm.toml bounds --angle 0.5 --velocity 1.0
//! ```

mod cli;
mod report;

use std::process;

use armff_common::config::{ConfigError, ConfigLoader};
use armff_feedforward::config::ArmConfig;
use clap::Parser;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::report::evaluate;

fn main() {
    let args = Args::parse();

    // Parse before installing the subscriber so `shared.log_level` applies.
    let raw = ArmConfig::load(&args.config);
    let level = if args.verbose {
        Level::DEBUG
    } else {
        raw.as_ref()
            .map(|c| Level::from(c.shared.log_level))
            .unwrap_or(Level::INFO)
    };
    setup_tracing(level, args.json);

    debug!("armff_tool v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args, raw) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, raw: Result<ArmConfig, ConfigError>) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = raw
        .map_err(|e| format!("{}: {e}", args.config.display()))?
        .into_loaded()?;
    info!(
        "Arm '{}' loaded from {} (ks={}, kg={}, kv={}, ka={})",
        loaded.shared.service_name,
        args.config.display(),
        loaded.feedforward.ks(),
        loaded.feedforward.kg(),
        loaded.feedforward.kv(),
        loaded.feedforward.ka(),
    );

    let report = evaluate(args.command, &loaded)?;
    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

/// Setup tracing subscriber: environment filter plus the chosen level.
fn setup_tracing(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
