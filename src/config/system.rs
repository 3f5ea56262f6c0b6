//! System configuration - root configuration structure.

use serde::Deserialize;

use super::enable::EnableLineConfig;
use super::mechanical::MechanicalConfig;
use super::motion::MotionConfig;

/// Root configuration structure from TOML.
///
/// ```toml
/// step_pin = 29
///
/// [motion]
/// min_frequency_hz = 2000
/// max_frequency_hz = 8000
///
/// [mechanics]
/// microsteps = 8
///
/// [enable_line]
/// kind = "mcp23017"
/// address = 0x27
/// pin = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemConfig {
    /// GPIO driving the STEP input from the pulse generator.
    #[serde(default = "default_step_pin")]
    pub step_pin: u8,

    /// Ramp parameters.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Motor step geometry.
    #[serde(default)]
    pub mechanics: MechanicalConfig,

    /// Optional enable line; absent means the driver is always armed.
    #[serde(default)]
    pub enable_line: Option<EnableLineConfig>,
}

fn default_step_pin() -> u8 {
    29
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            step_pin: default_step_pin(),
            motion: MotionConfig::default(),
            mechanics: MechanicalConfig::default(),
            enable_line: None,
        }
    }
}
