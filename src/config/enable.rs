//! Enable line wiring from configuration.

use serde::Deserialize;

/// Where the driver's enable input is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum EnableLineKind {
    /// A native MCU GPIO.
    #[default]
    Gpio,
    /// A pin on an MCP23017 I/O expander.
    Mcp23017,
}

/// Enable line configuration (`[enable_line]` table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnableLineConfig {
    /// Physical location of the line.
    #[serde(default)]
    pub kind: EnableLineKind,

    /// GPIO number, or expander pin (0..=7 port A, 8..=15 port B).
    pub pin: u8,

    /// 7-bit I2C address of the expander (0x20..=0x27).
    #[serde(default)]
    pub address: Option<u8>,

    /// Driver is armed while the line is low.
    #[serde(default = "default_active_low")]
    pub active_low: bool,
}

fn default_active_low() -> bool {
    true
}

impl EnableLineConfig {
    /// Native GPIO enable line, active low.
    pub fn gpio(pin: u8) -> Self {
        Self {
            kind: EnableLineKind::Gpio,
            pin,
            address: None,
            active_low: true,
        }
    }

    /// Expander enable line, active low.
    pub fn mcp23017(address: u8, pin: u8) -> Self {
        Self {
            kind: EnableLineKind::Mcp23017,
            pin,
            address: Some(address),
            active_low: true,
        }
    }
}
