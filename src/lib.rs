//! # stepper-pulse
//!
//! Non-blocking trapezoidal step-frequency control for stepper motors driven
//! by a hardware pulse generator, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Non-blocking**: `update()` is called from the host poll loop and never sleeps
//! - **Hardware pulses**: a PIO state machine or timer emits the STEP train; the
//!   controller only reprograms its rate
//! - **Position-based ramp**: linear acceleration and deceleration over a zone
//!   sized from the move length
//! - **Enable line**: native GPIO or MCP23017 expander pin, with a settle delay
//! - **Configuration-driven**: ramp and mechanics from TOML files
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_pulse::{MotionController, PinEnableLine};
//!
//! let config = stepper_pulse::load_config("motion.toml")?;
//!
//! let mut motor = MotionController::builder()
//!     .from_config(&config)
//!     .pulse_generator(pio_step)
//!     .enable_line(PinEnableLine::active_low(en_pin))
//!     .clock(timer)
//!     .build()?;
//!
//! motor.start(16_000)?;
//! while motor.is_running() {
//!     motor.update();
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Routes log records through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, EnableLineConfig, MechanicalConfig, MotionConfig, SystemConfig};
pub use error::{Error, HardwareError, MotionError, Result};
pub use hal::{AlwaysEnabled, EnableLine, Mcp23017Pin, MonotonicClock, PinEnableLine, PulseGenerator};
pub use motion::{accel_zone, target_frequency, MotionPhase};
pub use motor::{MotionController, MotionControllerBuilder, MotionSession};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Hertz, Microsteps, Revolutions};
