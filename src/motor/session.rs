//! Mutable state of the current move.

use crate::motion::{MotionPhase, PositionEstimator};

/// State of the one move a controller can run at a time.
///
/// Overwritten in place by every accepted `start`; never reallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSession {
    pub(crate) phase: MotionPhase,
    pub(crate) position: PositionEstimator,
    pub(crate) target_steps: i32,
    /// 0 while stopped, otherwise within the configured frequency bounds.
    pub(crate) commanded_frequency: u32,
    /// Mirrors the last successful start/stop sent to the pulse generator.
    pub(crate) pulses_active: bool,
    /// Mirrors the last successful write to the enable line.
    pub(crate) enable_active: bool,
    /// No pulse command is issued before this instant.
    pub(crate) settle_deadline_us: Option<u64>,
    pub(crate) cruise_logged: bool,
}

impl MotionSession {
    pub(crate) fn new(sample_interval_us: u64) -> Self {
        Self {
            phase: MotionPhase::Idle,
            position: PositionEstimator::new(sample_interval_us),
            target_steps: 0,
            commanded_frequency: 0,
            pulses_active: false,
            enable_active: false,
            settle_deadline_us: None,
            cruise_logged: false,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Estimated steps since the move started.
    #[inline]
    pub fn current_steps(&self) -> i32 {
        self.position.steps()
    }

    /// Step count requested by the last accepted `start`.
    #[inline]
    pub fn target_steps(&self) -> i32 {
        self.target_steps
    }

    /// Pulse rate last sent to the generator, 0 when stopped.
    #[inline]
    pub fn commanded_frequency(&self) -> u32 {
        self.commanded_frequency
    }

    /// Whether the generator has been told to run.
    #[inline]
    pub fn pulses_active(&self) -> bool {
        self.pulses_active
    }

    /// Whether the driver is believed to be armed.
    #[inline]
    pub fn enable_active(&self) -> bool {
        self.enable_active
    }

    /// Pending settle deadline, if the driver was armed recently.
    #[inline]
    pub fn settle_deadline_us(&self) -> Option<u64> {
        self.settle_deadline_us
    }
}
