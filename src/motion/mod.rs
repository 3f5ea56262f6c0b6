//! Motion module for stepper-pulse.
//!
//! Provides the frequency profile calculation and the open-loop position
//! estimate that feeds it.

mod estimator;
mod profile;

pub use estimator::PositionEstimator;
pub use profile::{accel_zone, target_frequency, MotionPhase};
