//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_pulse::load_config;
///
/// let config = load_config("stepper.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnableLineKind;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_parse_motion_overrides() {
        let toml = r#"
[motion]
min_frequency_hz = 1000
max_frequency_hz = 4000
accel_divisor = 10
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motion.min_frequency, 1000);
        assert_eq!(config.motion.max_frequency, 4000);
        assert_eq!(config.motion.accel_divisor, 10);
        assert_eq!(config.motion.min_accel_steps, 500);
    }

    #[test]
    fn test_parse_expander_enable_line() {
        let toml = r#"
[enable_line]
kind = "mcp23017"
address = 0x27
pin = 0
"#;

        let config = parse_config(toml).unwrap();
        let line = config.enable_line.unwrap();
        assert_eq!(line.kind, EnableLineKind::Mcp23017);
        assert_eq!(line.address, Some(0x27));
        assert!(line.active_low);
    }

    #[test]
    fn test_parse_rejects_invalid_range() {
        let toml = r#"
[motion]
min_frequency_hz = 9000
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidFrequencyRange { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/stepper.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
