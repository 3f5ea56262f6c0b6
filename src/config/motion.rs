//! Motion profile configuration from TOML.

use serde::Deserialize;

/// Default lowest commanded pulse rate.
pub const DEFAULT_MIN_FREQUENCY_HZ: u32 = 2000;
/// Default cruise pulse rate.
pub const DEFAULT_MAX_FREQUENCY_HZ: u32 = 8000;
/// Default fraction of the move spent ramping (`target / divisor`).
pub const DEFAULT_ACCEL_DIVISOR: i32 = 15;
/// Default shortest ramp length in steps.
pub const DEFAULT_MIN_ACCEL_STEPS: i32 = 500;
/// Default longest ramp length in steps.
pub const DEFAULT_MAX_ACCEL_STEPS: i32 = 3000;
/// Default minimum time between position samples.
pub const DEFAULT_SAMPLE_INTERVAL_US: u64 = 2000;
/// Default wait between arming the driver and the first pulse.
pub const DEFAULT_ENABLE_SETTLE_MS: u32 = 10;

/// Trapezoidal ramp parameters shared by the profile calculator and the
/// position estimator.
///
/// All fields fall back to the stock values when omitted from the TOML
/// `[motion]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Pulse rate at the start and end of every move.
    #[serde(default = "default_min_frequency", rename = "min_frequency_hz")]
    pub min_frequency: u32,

    /// Pulse rate held while cruising.
    #[serde(default = "default_max_frequency", rename = "max_frequency_hz")]
    pub max_frequency: u32,

    /// Ramp length as a fraction of the move: `target_steps / accel_divisor`.
    #[serde(default = "default_accel_divisor")]
    pub accel_divisor: i32,

    /// Lower clamp on the ramp length.
    #[serde(default = "default_min_accel_steps")]
    pub min_accel_steps: i32,

    /// Upper clamp on the ramp length.
    #[serde(default = "default_max_accel_steps")]
    pub max_accel_steps: i32,

    /// Position samples closer together than this are skipped.
    #[serde(default = "default_sample_interval", rename = "position_sample_interval_us")]
    pub position_sample_interval_us: u64,

    /// Driver settle time after the enable line is armed.
    #[serde(default = "default_enable_settle")]
    pub enable_settle_ms: u32,
}

fn default_min_frequency() -> u32 {
    DEFAULT_MIN_FREQUENCY_HZ
}

fn default_max_frequency() -> u32 {
    DEFAULT_MAX_FREQUENCY_HZ
}

fn default_accel_divisor() -> i32 {
    DEFAULT_ACCEL_DIVISOR
}

fn default_min_accel_steps() -> i32 {
    DEFAULT_MIN_ACCEL_STEPS
}

fn default_max_accel_steps() -> i32 {
    DEFAULT_MAX_ACCEL_STEPS
}

fn default_sample_interval() -> u64 {
    DEFAULT_SAMPLE_INTERVAL_US
}

fn default_enable_settle() -> u32 {
    DEFAULT_ENABLE_SETTLE_MS
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY_HZ,
            max_frequency: DEFAULT_MAX_FREQUENCY_HZ,
            accel_divisor: DEFAULT_ACCEL_DIVISOR,
            min_accel_steps: DEFAULT_MIN_ACCEL_STEPS,
            max_accel_steps: DEFAULT_MAX_ACCEL_STEPS,
            position_sample_interval_us: DEFAULT_SAMPLE_INTERVAL_US,
            enable_settle_ms: DEFAULT_ENABLE_SETTLE_MS,
        }
    }
}

impl MotionConfig {
    /// Width of the frequency ramp in Hz.
    #[inline]
    pub fn frequency_span(&self) -> u32 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Settle delay in microseconds.
    #[inline]
    pub fn enable_settle_us(&self) -> u64 {
        u64::from(self.enable_settle_ms) * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MotionConfig::default();
        assert_eq!(config.min_frequency, 2000);
        assert_eq!(config.max_frequency, 8000);
        assert_eq!(config.frequency_span(), 6000);
        assert_eq!(config.enable_settle_us(), 10_000);
    }
}
