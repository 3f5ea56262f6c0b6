//! Single output pin on an MCP23017 I2C I/O expander.
//!
//! Only the registers needed to drive an output are touched. Every write is a
//! read-modify-write of the port register so that the other 15 pins keep
//! their state.

use embedded_hal::digital::{self, ErrorType, OutputPin};
use embedded_hal::i2c::I2c;

use crate::error::ConfigError;

/// Port A direction register.
pub const REG_IODIRA: u8 = 0x00;
/// Port B direction register.
pub const REG_IODIRB: u8 = 0x01;
/// Port A output latch.
pub const REG_OLATA: u8 = 0x14;
/// Port B output latch.
pub const REG_OLATB: u8 = 0x15;

/// Lowest strap-selectable address.
pub const MIN_ADDRESS: u8 = 0x20;
/// Highest strap-selectable address.
pub const MAX_ADDRESS: u8 = 0x27;

/// Expander pin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExpanderError<E> {
    /// The underlying I2C transfer failed.
    Bus(E),
}

impl<E: core::fmt::Debug> digital::Error for ExpanderError<E> {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// One MCP23017 pin used as a push-pull output.
#[derive(Debug)]
pub struct Mcp23017Pin<I2C> {
    i2c: I2C,
    address: u8,
    pin: u8,
}

impl<I2C: I2c> Mcp23017Pin<I2C> {
    /// Bind to `pin` (0..=7 port A, 8..=15 port B) of the expander at `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is outside 0x20..=0x27 or the pin above 15.
    pub fn new(i2c: I2C, address: u8, pin: u8) -> Result<Self, ConfigError> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            return Err(ConfigError::InvalidExpanderAddress(address));
        }
        if pin > 15 {
            return Err(ConfigError::InvalidExpanderPin(pin));
        }
        Ok(Self { i2c, address, pin })
    }

    /// I2C address of the expander.
    #[inline]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Pin index on the expander.
    #[inline]
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Clear the pin's IODIR bit so it drives its latch value.
    pub fn configure_output(&mut self) -> Result<(), ExpanderError<I2C::Error>> {
        let reg = if self.pin < 8 { REG_IODIRA } else { REG_IODIRB };
        self.modify(reg, false)
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    #[inline]
    fn mask(&self) -> u8 {
        1 << (self.pin % 8)
    }

    fn modify(&mut self, reg: u8, set: bool) -> Result<(), ExpanderError<I2C::Error>> {
        let mut current = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut current)
            .map_err(ExpanderError::Bus)?;

        let value = if set {
            current[0] | self.mask()
        } else {
            current[0] & !self.mask()
        };

        self.i2c
            .write(self.address, &[reg, value])
            .map_err(ExpanderError::Bus)
    }

    fn write_level(&mut self, high: bool) -> Result<(), ExpanderError<I2C::Error>> {
        let reg = if self.pin < 8 { REG_OLATA } else { REG_OLATB };
        self.modify(reg, high)
    }
}

impl<I2C: I2c> ErrorType for Mcp23017Pin<I2C> {
    type Error = ExpanderError<I2C::Error>;
}

impl<I2C: I2c> OutputPin for Mcp23017Pin<I2C> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write_level(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write_level(true)
    }
}
