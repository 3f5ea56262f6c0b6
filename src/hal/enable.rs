//! Driver enable line.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

/// Logical arm/disarm control of the motor driver.
///
/// `set(true)` arms the driver (coils energised, STEP pulses honoured),
/// `set(false)` releases it. Electrical polarity is the implementor's concern.
pub trait EnableLine {
    /// Error reported when the line cannot be driven.
    type Error: core::fmt::Debug;

    /// Drive the line to the armed (`true`) or released (`false`) state.
    fn set(&mut self, active: bool) -> Result<(), Self::Error>;

    /// Whether the driver needs the settle delay after being armed.
    fn needs_settle(&self) -> bool {
        true
    }
}

impl<T: EnableLine + ?Sized> EnableLine for &mut T {
    type Error = T::Error;

    fn set(&mut self, active: bool) -> Result<(), Self::Error> {
        T::set(self, active)
    }

    fn needs_settle(&self) -> bool {
        T::needs_settle(self)
    }
}

/// Enable line on any embedded-hal output pin.
///
/// Works the same for a native GPIO and for an expander pin such as
/// [`Mcp23017Pin`](super::Mcp23017Pin).
#[derive(Debug)]
pub struct PinEnableLine<P> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> PinEnableLine<P> {
    /// Active-low line, the convention of A4988/DRV8825/TMC step-dir drivers.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Active-high line.
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> EnableLine for PinEnableLine<P> {
    type Error = P::Error;

    fn set(&mut self, active: bool) -> Result<(), Self::Error> {
        if active != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

/// Placeholder for drivers whose enable input is hard-wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEnabled;

impl EnableLine for AlwaysEnabled {
    type Error = Infallible;

    fn set(&mut self, _active: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn needs_settle(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_active_low_polarity() {
        let pin = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::High)]);
        let mut line = PinEnableLine::active_low(pin);

        line.set(true).unwrap();
        line.set(false).unwrap();

        line.release().done();
    }

    #[test]
    fn test_active_high_polarity() {
        let pin = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let mut line = PinEnableLine::active_high(pin);

        line.set(true).unwrap();
        line.set(false).unwrap();

        line.release().done();
    }
}
