//! Builder pattern for MotionController.

use crate::config::{validate_motion, MechanicalConfig, MotionConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::hal::{AlwaysEnabled, EnableLine, MonotonicClock, PulseGenerator};

use super::controller::MotionController;

/// Builder for creating MotionController instances.
///
/// The enable line defaults to [`AlwaysEnabled`]; calling
/// [`enable_line`](Self::enable_line) swaps in a real one.
pub struct MotionControllerBuilder<PG, EN, CLK>
where
    PG: PulseGenerator,
    EN: EnableLine,
    CLK: MonotonicClock,
{
    pulse_generator: Option<PG>,
    enable_line: EN,
    clock: Option<CLK>,
    motion: MotionConfig,
    mechanics: MechanicalConfig,
}

impl<PG, CLK> Default for MotionControllerBuilder<PG, AlwaysEnabled, CLK>
where
    PG: PulseGenerator,
    CLK: MonotonicClock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PG, CLK> MotionControllerBuilder<PG, AlwaysEnabled, CLK>
where
    PG: PulseGenerator,
    CLK: MonotonicClock,
{
    /// Create a new builder with stock ramp parameters.
    pub fn new() -> Self {
        Self {
            pulse_generator: None,
            enable_line: AlwaysEnabled,
            clock: None,
            motion: MotionConfig::default(),
            mechanics: MechanicalConfig::default(),
        }
    }
}

impl<PG, EN, CLK> MotionControllerBuilder<PG, EN, CLK>
where
    PG: PulseGenerator,
    EN: EnableLine,
    CLK: MonotonicClock,
{
    /// Set the pulse generator.
    pub fn pulse_generator(mut self, pulses: PG) -> Self {
        self.pulse_generator = Some(pulses);
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: CLK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the driver enable line.
    pub fn enable_line<E2: EnableLine>(self, line: E2) -> MotionControllerBuilder<PG, E2, CLK> {
        MotionControllerBuilder {
            pulse_generator: self.pulse_generator,
            enable_line: line,
            clock: self.clock,
            motion: self.motion,
            mechanics: self.mechanics,
        }
    }

    /// Set the ramp parameters.
    pub fn config(mut self, config: MotionConfig) -> Self {
        self.motion = config;
        self
    }

    /// Set the motor step geometry.
    pub fn mechanics(mut self, mechanics: MechanicalConfig) -> Self {
        self.mechanics = mechanics;
        self
    }

    /// Take ramp parameters and mechanics from a loaded configuration.
    ///
    /// The enable line described there still has to be constructed by the
    /// caller, since it depends on board-specific pin types.
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.motion = config.motion;
        self.mechanics = config.mechanics;
        self
    }

    /// Build the MotionController.
    ///
    /// # Errors
    ///
    /// Returns an error if the pulse generator or clock is missing, or if the
    /// ramp parameters are invalid.
    pub fn build(self) -> Result<MotionController<PG, EN, CLK>> {
        validate_motion(&self.motion)?;

        let pulses = self
            .pulse_generator
            .ok_or(Error::Config(ConfigError::Missing("pulse_generator")))?;

        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::Missing("clock")))?;

        Ok(MotionController::new(
            pulses,
            self.enable_line,
            clock,
            self.motion,
            self.mechanics,
        ))
    }
}
