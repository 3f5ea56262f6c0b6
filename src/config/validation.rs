//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::enable::{EnableLineConfig, EnableLineKind};
use super::{MotionConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Frequency bounds are non-zero and ordered
/// - Acceleration divisor and zone clamps are positive and ordered
/// - Position sample interval is non-zero
/// - Expander address and pin are in range
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_motion(&config.motion)?;

    if let Some(ref line) = config.enable_line {
        validate_enable_line(line)?;
    }

    Ok(())
}

/// Validate ramp parameters on their own.
pub fn validate_motion(config: &MotionConfig) -> Result<()> {
    if config.min_frequency == 0 || config.min_frequency >= config.max_frequency {
        return Err(Error::Config(ConfigError::InvalidFrequencyRange {
            min: config.min_frequency,
            max: config.max_frequency,
        }));
    }

    if config.accel_divisor <= 0 {
        return Err(Error::Config(ConfigError::InvalidAccelDivisor));
    }

    if config.min_accel_steps <= 0 || config.min_accel_steps > config.max_accel_steps {
        return Err(Error::Config(ConfigError::InvalidAccelSteps {
            min: config.min_accel_steps,
            max: config.max_accel_steps,
        }));
    }

    if config.position_sample_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidSampleInterval));
    }

    // Each sample truncates to whole steps; below one step per sample the
    // estimate never leaves zero.
    if u64::from(config.min_frequency).saturating_mul(config.position_sample_interval_us)
        < 1_000_000
    {
        return Err(Error::Config(ConfigError::SampleIntervalTooShort {
            min_frequency: config.min_frequency,
            interval_us: config.position_sample_interval_us,
        }));
    }

    Ok(())
}

fn validate_enable_line(line: &EnableLineConfig) -> Result<()> {
    if line.kind == EnableLineKind::Mcp23017 {
        let address = line
            .address
            .ok_or(Error::Config(ConfigError::Missing("enable_line.address")))?;
        if !(0x20..=0x27).contains(&address) {
            return Err(Error::Config(ConfigError::InvalidExpanderAddress(address)));
        }
        if line.pin > 15 {
            return Err(Error::Config(ConfigError::InvalidExpanderPin(line.pin)));
        }
    }

    Ok(())
}
