//! Integration tests for TOML configuration loading and validation.

use std::io::Write;

use stepper_pulse::config::units::Microsteps;
use stepper_pulse::config::{
    load_config, parse_config, validate_config, EnableLineConfig, EnableLineKind, SystemConfig,
};
use stepper_pulse::error::{ConfigError, Error};

const FULL_CONFIG: &str = r#"
step_pin = 15

[motion]
min_frequency_hz = 1000
max_frequency_hz = 12000
accel_divisor = 10
min_accel_steps = 200
max_accel_steps = 4000
position_sample_interval_us = 1000
enable_settle_ms = 5

[mechanics]
full_steps_per_revolution = 400
microsteps = 16

[enable_line]
kind = "mcp23017"
address = 0x20
pin = 9
active_low = false
"#;

#[test]
fn test_parse_full_config() {
    let config = parse_config(FULL_CONFIG).expect("Should parse full config");

    assert_eq!(config.step_pin, 15);
    assert_eq!(config.motion.min_frequency, 1000);
    assert_eq!(config.motion.max_frequency, 12000);
    assert_eq!(config.motion.accel_divisor, 10);
    assert_eq!(config.motion.min_accel_steps, 200);
    assert_eq!(config.motion.max_accel_steps, 4000);
    assert_eq!(config.motion.position_sample_interval_us, 1000);
    assert_eq!(config.motion.enable_settle_ms, 5);
    assert_eq!(config.mechanics.microsteps, Microsteps::SIXTEENTH);
    assert_eq!(config.mechanics.steps_per_revolution(), 6400);

    let line = config.enable_line.expect("Should have an enable line");
    assert_eq!(line.kind, EnableLineKind::Mcp23017);
    assert_eq!(line.address, Some(0x20));
    assert_eq!(line.pin, 9);
    assert!(!line.active_low);
}

#[test]
fn test_partial_motion_table_keeps_defaults() {
    let config = parse_config(
        r#"
[motion]
max_frequency_hz = 6000
"#,
    )
    .unwrap();

    assert_eq!(config.motion.min_frequency, 2000);
    assert_eq!(config.motion.max_frequency, 6000);
    assert_eq!(config.motion.accel_divisor, 15);
    assert_eq!(config.motion.enable_settle_ms, 10);
    assert_eq!(config.enable_line, None);
}

#[test]
fn test_gpio_enable_line() {
    let config = parse_config(
        r#"
[enable_line]
kind = "gpio"
pin = 7
"#,
    )
    .unwrap();

    assert_eq!(config.enable_line, Some(EnableLineConfig::gpio(7)));
}

#[test]
fn test_invalid_microsteps_fail_to_parse() {
    let result = parse_config(
        r#"
[mechanics]
microsteps = 12
"#,
    );

    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

#[test]
fn test_unknown_enable_kind_fails_to_parse() {
    let result = parse_config(
        r#"
[enable_line]
kind = "shift_register"
pin = 1
"#,
    );

    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

#[test]
fn test_parse_rejects_inverted_accel_clamps() {
    let result = parse_config(
        r#"
[motion]
min_accel_steps = 3000
max_accel_steps = 500
"#,
    );

    assert_eq!(
        result.err(),
        Some(Error::Config(ConfigError::InvalidAccelSteps {
            min: 3000,
            max: 500
        }))
    );
}

#[test]
fn test_validate_expander_requires_address() {
    let mut line = EnableLineConfig::mcp23017(0x27, 0);
    line.address = None;
    let config = SystemConfig {
        enable_line: Some(line),
        ..SystemConfig::default()
    };

    assert_eq!(
        validate_config(&config).err(),
        Some(Error::Config(ConfigError::Missing("enable_line.address")))
    );
}

#[test]
fn test_validate_expander_pin_range() {
    let config = SystemConfig {
        enable_line: Some(EnableLineConfig::mcp23017(0x27, 16)),
        ..SystemConfig::default()
    };

    assert_eq!(
        validate_config(&config).err(),
        Some(Error::Config(ConfigError::InvalidExpanderPin(16)))
    );
}

#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("stepper-pulse-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();
    drop(file);

    let config = load_config(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().motion.max_frequency, 12000);
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/stepper-pulse.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
