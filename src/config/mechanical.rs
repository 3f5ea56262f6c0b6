//! Motor mechanics used to convert revolutions to steps.

use serde::Deserialize;

use super::units::Microsteps;

/// Step geometry of the attached motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MechanicalConfig {
    /// Base steps per revolution (200 for 1.8° motors).
    #[serde(default = "default_full_steps")]
    pub full_steps_per_revolution: u16,

    /// Microstep setting of the driver.
    #[serde(default)]
    pub microsteps: Microsteps,
}

fn default_full_steps() -> u16 {
    200
}

impl Default for MechanicalConfig {
    fn default() -> Self {
        Self {
            full_steps_per_revolution: default_full_steps(),
            microsteps: Microsteps::default(),
        }
    }
}

impl MechanicalConfig {
    /// Pulses needed for one full output revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        u32::from(self.full_steps_per_revolution) * u32::from(self.microsteps.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_per_revolution() {
        // 200 * 8 microsteps
        assert_eq!(MechanicalConfig::default().steps_per_revolution(), 1600);
    }

    #[test]
    fn test_sixteenth_steps() {
        let config = MechanicalConfig {
            full_steps_per_revolution: 400,
            microsteps: Microsteps::SIXTEENTH,
        };
        assert_eq!(config.steps_per_revolution(), 6400);
    }
}
