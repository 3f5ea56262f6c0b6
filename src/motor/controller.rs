//! Motion controller state machine.
//!
//! Owns the pulse generator, the enable line and the clock. All work happens
//! inside `start`, `stop` and `update`, which the host calls from a single
//! poll loop; nothing here blocks or sleeps.

use crate::config::units::{Hertz, Revolutions};
use crate::config::{MechanicalConfig, MotionConfig};
use crate::error::{HardwareError, MotionError, Result};
use crate::hal::{AlwaysEnabled, EnableLine, MonotonicClock, PulseGenerator};
use crate::motion::{target_frequency, MotionPhase};

use super::builder::MotionControllerBuilder;
use super::session::MotionSession;

/// Non-blocking trapezoidal step-rate controller.
///
/// Generic over:
/// - `PG`: hardware pulse generator
/// - `EN`: driver enable line
/// - `CLK`: monotonic microsecond clock
///
/// Lifecycle: `Idle → Accelerating → {Running | Decelerating} → Completed`,
/// re-entered by `start`. `stop` returns to `Idle` from anywhere.
pub struct MotionController<PG, EN, CLK>
where
    PG: PulseGenerator,
    EN: EnableLine,
    CLK: MonotonicClock,
{
    /// STEP pulse source.
    pulses: PG,

    /// Driver enable input.
    enable: EN,

    /// Time base for dead-reckoning and the settle deadline.
    clock: CLK,

    /// Ramp parameters.
    config: MotionConfig,

    /// Step geometry for revolution conversions.
    mechanics: MechanicalConfig,

    /// Current move.
    session: MotionSession,

    /// Set when the pulse generator failed to initialize. Permanent.
    disabled: bool,

    /// Latest hardware command failure, until taken by the host.
    fault: Option<HardwareError>,
}

impl<PG, CLK> MotionController<PG, AlwaysEnabled, CLK>
where
    PG: PulseGenerator,
    CLK: MonotonicClock,
{
    /// Start building a controller.
    pub fn builder() -> MotionControllerBuilder<PG, AlwaysEnabled, CLK> {
        MotionControllerBuilder::new()
    }
}

impl<PG, EN, CLK> MotionController<PG, EN, CLK>
where
    PG: PulseGenerator,
    EN: EnableLine,
    CLK: MonotonicClock,
{
    /// Take ownership of the hardware and bring it to a safe resting state.
    ///
    /// The enable line is driven to released. If the pulse generator cannot be
    /// initialized the controller is built anyway, but in a permanently
    /// disabled state where every `start` is rejected.
    pub(crate) fn new(
        pulses: PG,
        enable: EN,
        clock: CLK,
        config: MotionConfig,
        mechanics: MechanicalConfig,
    ) -> Self {
        let mut controller = Self {
            pulses,
            enable,
            clock,
            config,
            mechanics,
            session: MotionSession::new(config.position_sample_interval_us),
            disabled: false,
            fault: None,
        };

        if controller.enable.set(false).is_err() {
            controller.record_fault(HardwareError::EnableLine);
        }

        if controller.pulses.init().is_err() {
            error!("Pulse generator unavailable, motion disabled");
            controller.disabled = true;
        } else {
            info!(
                "Stepper controller ready: {} Hz to {} Hz",
                config.min_frequency,
                config.max_frequency
            );
        }

        controller
    }

    /// Begin a move of `target_steps` from the current position.
    ///
    /// Supersedes any move in progress. Arms the driver if needed; when it
    /// was released, the first pulse is deferred until the settle delay has
    /// passed and is issued by a later `update`.
    ///
    /// # Errors
    ///
    /// - `MotionError::InvalidTarget` if `target_steps <= 0`; nothing changes.
    /// - `MotionError::Disabled` if the pulse generator never initialized.
    pub fn start(&mut self, target_steps: i32) -> Result<()> {
        if target_steps <= 0 {
            error!("Invalid target steps: {}", target_steps);
            return Err(MotionError::InvalidTarget(target_steps).into());
        }

        if self.disabled {
            error!("Start rejected: pulse generator unavailable");
            return Err(MotionError::Disabled.into());
        }

        info!("Starting move: {} steps", target_steps);

        let now = self.clock.now_us();
        // A restart inside the settle window inherits the remaining wait.
        let pending = self
            .session
            .settle_deadline_us
            .filter(|&deadline| now < deadline);
        let newly_armed = self.arm_driver();

        self.session.position.reset(now);
        self.session.target_steps = target_steps;
        self.session.phase = MotionPhase::Accelerating;
        self.session.cruise_logged = false;
        self.session.settle_deadline_us = None;

        let settle_us = self.config.enable_settle_us();
        let deadline = if newly_armed && settle_us > 0 && self.enable.needs_settle() {
            Some(now.saturating_add(settle_us))
        } else {
            pending
        };

        if let Some(deadline) = deadline {
            // Anything still running belongs to a superseded move.
            if self.session.pulses_active {
                self.stop_pulses();
            }
            self.session.settle_deadline_us = Some(deadline);
        } else {
            self.command(self.config.min_frequency);
        }

        Ok(())
    }

    /// Halt pulses and release the driver.
    ///
    /// The position estimate is kept; `start` is required to move again.
    pub fn stop(&mut self) {
        info!("Stopping motor at {} steps", self.session.current_steps());
        self.halt();
        self.session.phase = MotionPhase::Idle;
    }

    /// Advance the move by one poll.
    ///
    /// Does nothing in `Idle` or `Completed`. Otherwise integrates position,
    /// recomputes the target rate and reprograms the generator only when the
    /// rate changed. Returns the phase after the poll.
    pub fn update(&mut self) -> MotionPhase {
        if !self.session.phase.is_moving() {
            return self.session.phase;
        }

        let now = self.clock.now_us();

        if let Some(deadline) = self.session.settle_deadline_us {
            if now < deadline {
                return self.session.phase;
            }
            debug!("Driver settled");
            self.session.settle_deadline_us = None;
            self.session.position.rebase(now);
            self.command(self.config.min_frequency);
            return self.session.phase;
        }

        if self
            .session
            .position
            .advance(self.session.commanded_frequency, now)
            .is_none()
        {
            return self.session.phase;
        }

        let target = self.session.target_steps;
        let (frequency, phase) =
            target_frequency(self.session.position.steps(), target, &self.config);

        if phase == MotionPhase::Completed {
            self.session.position.clamp_to(target);
            self.halt();
            self.session.phase = MotionPhase::Completed;
            info!("Move completed: {} steps", target);
            return MotionPhase::Completed;
        }

        if phase == MotionPhase::Running && !self.session.cruise_logged {
            debug!(
                "Entering constant speed: {} Hz, ramp {} steps",
                frequency,
                crate::motion::accel_zone(target, &self.config)
            );
            self.session.cruise_logged = true;
        }

        self.session.phase = phase;

        if frequency != self.session.commanded_frequency {
            self.command(frequency);
            trace!(
                "Steps {}/{} {:?} {} Hz",
                self.session.position.steps(),
                target,
                phase,
                frequency
            );
        }

        phase
    }

    /// Start a move expressed in output revolutions.
    ///
    /// The step count is truncated toward zero, so tiny moves are rejected
    /// like any other non-positive target.
    pub fn start_revolutions(&mut self, revolutions: Revolutions) -> Result<()> {
        let steps = revolutions.to_steps(self.mechanics.steps_per_revolution());
        self.start(steps)
    }

    /// Whether a move is in progress (including a pending settle delay).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.session.phase.is_moving()
    }

    /// Estimated steps since the last `start`.
    #[inline]
    pub fn current_steps(&self) -> i32 {
        self.session.current_steps()
    }

    /// Step count of the last accepted `start`.
    #[inline]
    pub fn target_steps(&self) -> i32 {
        self.session.target_steps
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.session.phase
    }

    /// Pulse rate last sent to the generator, 0 when stopped.
    #[inline]
    pub fn commanded_frequency(&self) -> u32 {
        self.session.commanded_frequency
    }

    /// Estimated position in revolutions.
    pub fn current_revolutions(&self) -> Revolutions {
        Revolutions::from_steps(self.current_steps(), self.mechanics.steps_per_revolution())
    }

    /// Target in revolutions.
    pub fn target_revolutions(&self) -> Revolutions {
        Revolutions::from_steps(self.target_steps(), self.mechanics.steps_per_revolution())
    }

    /// Move progress for display, 0..=100.
    pub fn progress_percent(&self) -> u8 {
        let target = self.session.target_steps;
        if target <= 0 {
            return 0;
        }
        let current = i64::from(self.current_steps().max(0));
        (current * 100 / i64::from(target)).min(100) as u8
    }

    /// Whether the pulse generator failed to initialize.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Latest hardware command failure, clearing it.
    pub fn take_fault(&mut self) -> Option<HardwareError> {
        self.fault.take()
    }

    /// Full session snapshot.
    #[inline]
    pub fn session(&self) -> &MotionSession {
        &self.session
    }

    /// Ramp parameters in use.
    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Step geometry in use.
    #[inline]
    pub fn mechanics(&self) -> &MechanicalConfig {
        &self.mechanics
    }

    /// Borrow the pulse generator.
    #[inline]
    pub fn pulse_generator(&self) -> &PG {
        &self.pulses
    }

    /// Borrow the enable line.
    #[inline]
    pub fn enable_line(&self) -> &EN {
        &self.enable
    }

    /// Tear down the controller and hand back the hardware.
    ///
    /// The hardware is left as it is; call `stop` first for a safe state.
    pub fn release(self) -> (PG, EN, CLK) {
        (self.pulses, self.enable, self.clock)
    }

    /// Send `frequency` to the generator, starting it if needed.
    ///
    /// `commanded_frequency` only follows a fully successful command, so a
    /// failed write is retried on the next poll that computes a new rate.
    fn command(&mut self, frequency: u32) {
        if self.pulses.configure(Hertz(frequency)).is_err() {
            self.record_fault(HardwareError::PulseGenerator);
            return;
        }

        if !self.session.pulses_active {
            if self.pulses.start().is_err() {
                self.record_fault(HardwareError::PulseGenerator);
                return;
            }
            self.session.pulses_active = true;
            debug!("Pulses started at {} Hz", frequency);
        }

        self.session.commanded_frequency = frequency;
    }

    fn stop_pulses(&mut self) {
        if self.pulses.stop().is_err() {
            self.record_fault(HardwareError::PulseGenerator);
        }
        self.session.pulses_active = false;
        self.session.commanded_frequency = 0;
    }

    /// Stop pulses and release the driver.
    fn halt(&mut self) {
        self.stop_pulses();
        self.session.settle_deadline_us = None;
        self.disarm_driver();
    }

    /// Arm the driver. Returns `true` if the line was released before.
    fn arm_driver(&mut self) -> bool {
        if self.session.enable_active {
            return false;
        }
        if self.enable.set(true).is_err() {
            self.record_fault(HardwareError::EnableLine);
            return false;
        }
        self.session.enable_active = true;
        debug!("Stepper driver enabled");
        true
    }

    fn disarm_driver(&mut self) {
        if !self.session.enable_active {
            return;
        }
        if self.enable.set(false).is_err() {
            self.record_fault(HardwareError::EnableLine);
            return;
        }
        self.session.enable_active = false;
        debug!("Stepper driver disabled");
    }

    fn record_fault(&mut self, fault: HardwareError) {
        warn!("Hardware command failed: {:?}", fault);
        self.fault = Some(fault);
    }
}
