//! Motor module for stepper-pulse.
//!
//! Provides the motion controller that turns a step target into a
//! trapezoidal pulse-rate schedule on a hardware pulse generator.

mod builder;
mod controller;
mod session;

pub use builder::MotionControllerBuilder;
pub use controller::MotionController;
pub use session::MotionSession;
