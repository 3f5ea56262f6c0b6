//! Error types for stepper-pulse.
//!
//! Provides unified error handling across configuration, motion control and
//! hardware access.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-pulse operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion request rejected
    Motion(MotionError),
    /// Pulse generator or enable line command failed
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Frequency bounds are zero or inverted
    InvalidFrequencyRange {
        /// Configured minimum frequency in Hz
        min: u32,
        /// Configured maximum frequency in Hz
        max: u32,
    },
    /// Acceleration divisor must be non-zero
    InvalidAccelDivisor,
    /// Acceleration zone bounds are zero or inverted
    InvalidAccelSteps {
        /// Configured minimum zone length
        min: i32,
        /// Configured maximum zone length
        max: i32,
    },
    /// Position sample interval must be non-zero
    InvalidSampleInterval,
    /// A sample at the minimum rate would advance less than one step
    SampleIntervalTooShort {
        /// Configured minimum frequency in Hz
        min_frequency: u32,
        /// Configured sample interval in microseconds
        interval_us: u64,
    },
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// MCP23017 address outside 0x20..=0x27
    InvalidExpanderAddress(u8),
    /// MCP23017 pin outside 0..=15
    InvalidExpanderPin(u8),
    /// A required builder part was not supplied
    Missing(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motion request errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Target step count must be positive
    InvalidTarget(i32),
    /// The pulse generator could not be initialized; the controller is inert
    Disabled,
}

/// Hardware command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// Pulse generator rejected a configure/start/stop/init command
    PulseGenerator,
    /// Enable line could not be driven
    EnableLine,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidFrequencyRange { min, max } => {
                write!(f, "Invalid frequency range: min ({} Hz) must be > 0 and < max ({} Hz)", min, max)
            }
            ConfigError::InvalidAccelDivisor => write!(f, "Acceleration divisor must be > 0"),
            ConfigError::InvalidAccelSteps { min, max } => {
                write!(f, "Invalid acceleration steps: min ({}) must be > 0 and <= max ({})", min, max)
            }
            ConfigError::InvalidSampleInterval => write!(f, "Position sample interval must be > 0"),
            ConfigError::SampleIntervalTooShort { min_frequency, interval_us } => write!(
                f,
                "Sample interval {} us is shorter than one step at {} Hz",
                interval_us, min_frequency
            ),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidExpanderAddress(a) => {
                write!(f, "Invalid MCP23017 address 0x{:02X}. Must be 0x20-0x27", a)
            }
            ConfigError::InvalidExpanderPin(p) => write!(f, "Invalid MCP23017 pin {}. Must be 0-15", p),
            ConfigError::Missing(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidTarget(steps) => {
                write!(f, "Invalid target steps: {}. Must be > 0", steps)
            }
            MotionError::Disabled => write!(f, "Pulse generator unavailable, controller disabled"),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::PulseGenerator => write!(f, "Pulse generator command failed"),
            HardwareError::EnableLine => write!(f, "Enable line write failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
