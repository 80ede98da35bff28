//! Config file loading through the public API.

use std::fs;

use armff_common::config::{ConfigError, LogLevel};
use armff_feedforward::config::load_config;
use tempfile::TempDir;

fn write(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("arm.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_complete_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        r#"
[shared]
log_level = "debug"
service_name = "wrist"

[gains]
ks = 0.15
kg = 0.4
kv = 2.2

[limits]
max_voltage = 10.0
"#,
    );

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.shared.log_level, LogLevel::Debug);
    assert_eq!(loaded.shared.service_name, "wrist");
    assert_eq!(loaded.feedforward.ka(), 0.0);
    assert_eq!(loaded.limits.max_voltage, 10.0);

    let v = loaded
        .feedforward
        .max_achievable_velocity(loaded.limits.max_voltage, 0.0, 0.0);
    assert!((v - (10.0 - 0.15 - 0.4) / 2.2).abs() < 1e-12);
}

#[test]
fn missing_file_reported() {
    let dir = TempDir::new().unwrap();
    let result = load_config(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn empty_service_name_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        r#"
[shared]
service_name = ""

[gains]
ks = 0.0
kg = 0.0
kv = 1.0
"#,
    );
    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn negative_ka_rejected_with_model_message() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        r#"
[shared]
service_name = "elbow"

[gains]
ks = 0.0
kg = 1.0
kv = 1.0
ka = -0.01
"#,
    );
    match load_config(&path) {
        Err(ConfigError::ValidationError(msg)) => {
            assert_eq!(
                msg,
                "invalid argument: ka must be a non-negative number, got -0.01"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
