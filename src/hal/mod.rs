//! Hardware capabilities consumed by the motion controller.
//!
//! The controller never touches registers itself. It drives three owned
//! capabilities:
//!
//! - [`PulseGenerator`]: hardware-timed STEP pulse train (PIO, timer PWM, ...)
//! - [`EnableLine`]: the driver's enable input
//! - [`MonotonicClock`]: microsecond timestamps for dead-reckoning

mod clock;
mod enable;
pub mod mcp23017;
mod pulse;

pub use clock::MonotonicClock;
pub use enable::{AlwaysEnabled, EnableLine, PinEnableLine};
pub use mcp23017::{ExpanderError, Mcp23017Pin};
pub use pulse::PulseGenerator;
