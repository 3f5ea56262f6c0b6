//! Step-count based trapezoidal frequency profile.
//!
//! The ramp is linear in *position*, not in time: the commanded rate is a
//! pure function of how far the move has progressed. Irregular polling only
//! changes how finely the ramp is sampled, never its shape.

use crate::config::MotionConfig;

/// Current phase of a motion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// No session, or session stopped by the caller.
    #[default]
    Idle,
    /// Ramping up from the minimum rate.
    Accelerating,
    /// Holding the maximum rate.
    Running,
    /// Ramping down toward the minimum rate.
    Decelerating,
    /// Target reached; pulses stopped and driver released.
    Completed,
}

impl MotionPhase {
    /// Whether pulses are (or are about to be) emitted in this phase.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(
            self,
            MotionPhase::Accelerating | MotionPhase::Running | MotionPhase::Decelerating
        )
    }

    /// Short label for status displays.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionPhase::Idle => "Idle",
            MotionPhase::Accelerating => "Accelerating",
            MotionPhase::Running => "Running",
            MotionPhase::Decelerating => "Decelerating",
            MotionPhase::Completed => "Completed",
        }
    }
}

impl core::fmt::Display for MotionPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of each ramp for a move of `target_steps`.
///
/// A fixed fraction of the travel, clamped so that short moves still ramp
/// over `min_accel_steps` and long moves never ramp for more than
/// `max_accel_steps`.
pub fn accel_zone(target_steps: i32, config: &MotionConfig) -> i32 {
    let divisor = config.accel_divisor.max(1);
    let zone = target_steps / divisor;
    if zone < config.min_accel_steps {
        config.min_accel_steps
    } else if zone > config.max_accel_steps {
        config.max_accel_steps
    } else {
        zone
    }
}

/// Pulse rate and phase for the given position within a move.
///
/// Returns `(0, Completed)` once no steps remain. The acceleration check runs
/// first, so moves shorter than two ramps keep the `Accelerating` label until
/// `current_steps` leaves the first ramp.
pub fn target_frequency(
    current_steps: i32,
    target_steps: i32,
    config: &MotionConfig,
) -> (u32, MotionPhase) {
    let remaining = target_steps.saturating_sub(current_steps);
    if remaining <= 0 {
        return (0, MotionPhase::Completed);
    }

    let zone = accel_zone(target_steps, config);

    if current_steps < zone {
        let frequency = ramp(current_steps, zone, config);
        return (frequency, MotionPhase::Accelerating);
    }

    if remaining < zone {
        let frequency = ramp(remaining, zone, config);
        return (frequency, MotionPhase::Decelerating);
    }

    (config.max_frequency, MotionPhase::Running)
}

/// `min + span * distance / zone`, with `0 <= distance < zone`.
#[inline]
fn ramp(distance: i32, zone: i32, config: &MotionConfig) -> u32 {
    let distance = distance.max(0) as u64;
    let zone = zone.max(1) as u64;
    let increment = u64::from(config.frequency_span()) * distance / zone;
    config.min_frequency + increment as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_move_clamps_zone_up() {
        let config = MotionConfig::default();
        assert_eq!(accel_zone(100, &config), 500);
    }

    #[test]
    fn test_long_move_clamps_zone_down() {
        let config = MotionConfig::default();
        assert_eq!(accel_zone(1_000_000, &config), 3000);
    }

    #[test]
    fn test_mid_move_zone_truncates() {
        let config = MotionConfig::default();
        // 10000 / 15 = 666.67
        assert_eq!(accel_zone(10_000, &config), 666);
    }

    #[test]
    fn test_symmetric_endpoints() {
        let config = MotionConfig::default();

        assert_eq!(target_frequency(0, 10_000, &config), (2000, MotionPhase::Accelerating));
        assert_eq!(target_frequency(5000, 10_000, &config), (8000, MotionPhase::Running));

        let (end, phase) = target_frequency(9999, 10_000, &config);
        assert_eq!(phase, MotionPhase::Decelerating);
        // 2000 + 6000 * 1 / 666 = 2009
        assert_eq!(end, 2009);
    }

    #[test]
    fn test_triangular_move_never_cruises() {
        let config = MotionConfig::default();
        for current in 0..100 {
            let (frequency, phase) = target_frequency(current, 100, &config);
            assert_eq!(phase, MotionPhase::Accelerating);
            assert!(frequency < config.max_frequency);
        }
    }

    #[test]
    fn test_done_when_no_steps_remain() {
        let config = MotionConfig::default();
        assert_eq!(target_frequency(100, 100, &config), (0, MotionPhase::Completed));
        assert_eq!(target_frequency(150, 100, &config), (0, MotionPhase::Completed));
    }

    #[test]
    fn test_decel_boundary() {
        let config = MotionConfig::default();
        // zone = 666; remaining == zone is still cruise
        assert_eq!(target_frequency(10_000 - 666, 10_000, &config).1, MotionPhase::Running);
        assert_eq!(target_frequency(10_000 - 665, 10_000, &config).1, MotionPhase::Decelerating);
    }

    #[test]
    fn test_phase_labels() {
        assert!(MotionPhase::Running.is_moving());
        assert!(!MotionPhase::Completed.is_moving());
        assert!(!MotionPhase::Idle.is_moving());
        assert_eq!(MotionPhase::Decelerating.as_str(), "Decelerating");
    }
}
