//! Pulse generator capability.

use crate::config::units::Hertz;

/// A peripheral that emits an unbounded train of STEP pulses at a commanded
/// rate without software involvement per pulse.
///
/// Implementations typically wrap an RP2040 PIO state machine or a timer
/// channel in PWM mode.
pub trait PulseGenerator {
    /// Error reported by the peripheral.
    type Error: core::fmt::Debug;

    /// Acquire the peripheral (load the PIO program, claim the timer, ...).
    ///
    /// Called once when the controller is built. A failure leaves the
    /// controller permanently disabled.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Set the pulse rate. Takes effect immediately if already running.
    fn configure(&mut self, frequency: Hertz) -> Result<(), Self::Error>;

    /// Begin emitting pulses at the configured rate.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stop emitting pulses.
    fn stop(&mut self) -> Result<(), Self::Error>;
}

impl<T: PulseGenerator + ?Sized> PulseGenerator for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn configure(&mut self, frequency: Hertz) -> Result<(), Self::Error> {
        T::configure(self, frequency)
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        T::start(self)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        T::stop(self)
    }
}
