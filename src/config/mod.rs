//! Configuration module for stepper-pulse.
//!
//! Provides types for loading and validating ramp, mechanics and enable-line
//! settings from TOML files (with `std` feature) or pre-built values.

mod enable;
mod mechanical;
mod motion;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use enable::{EnableLineConfig, EnableLineKind};
pub use mechanical::MechanicalConfig;
pub use motion::{
    MotionConfig, DEFAULT_ACCEL_DIVISOR, DEFAULT_ENABLE_SETTLE_MS, DEFAULT_MAX_ACCEL_STEPS,
    DEFAULT_MAX_FREQUENCY_HZ, DEFAULT_MIN_ACCEL_STEPS, DEFAULT_MIN_FREQUENCY_HZ,
    DEFAULT_SAMPLE_INTERVAL_US,
};
pub use system::SystemConfig;
pub use validation::{validate_config, validate_motion};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use units::{Hertz, Microsteps, Revolutions};
