//! Open-loop position estimate.
//!
//! Nothing reads back the pulses actually emitted. Position is integrated from
//! the last commanded rate and the time elapsed since the previous sample, so
//! the estimate drifts whenever the generator lags a rate change (very short
//! moves, or moves restarted in quick succession).

/// Dead-reckoned step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionEstimator {
    /// Estimated steps since the session started.
    steps: i32,
    /// Timestamp of the last sample that advanced `steps`.
    last_sample_us: u64,
    /// Samples closer together than this are skipped.
    interval_us: u64,
}

impl PositionEstimator {
    /// Create an estimator at step 0.
    pub fn new(interval_us: u64) -> Self {
        Self {
            steps: 0,
            last_sample_us: 0,
            interval_us,
        }
    }

    /// Estimated steps since the session started.
    #[inline]
    pub fn steps(&self) -> i32 {
        self.steps
    }

    /// Timestamp of the last accepted sample.
    #[inline]
    pub fn last_sample_us(&self) -> u64 {
        self.last_sample_us
    }

    /// Restart counting from zero at `now_us`.
    pub fn reset(&mut self, now_us: u64) {
        self.steps = 0;
        self.last_sample_us = now_us;
    }

    /// Move the sample origin to `now_us` without changing the count.
    pub fn rebase(&mut self, now_us: u64) {
        self.last_sample_us = now_us;
    }

    /// Integrate `frequency` over the time since the last sample.
    ///
    /// Returns `None` while the sample interval has not elapsed; otherwise the
    /// number of steps added (possibly zero).
    pub fn advance(&mut self, frequency: u32, now_us: u64) -> Option<i32> {
        let elapsed = now_us.saturating_sub(self.last_sample_us);
        if elapsed < self.interval_us {
            return None;
        }

        let delta = u64::from(frequency).saturating_mul(elapsed) / 1_000_000;
        let delta = delta.min(i32::MAX as u64) as i32;

        self.steps = self.steps.saturating_add(delta);
        self.last_sample_us = now_us;
        Some(delta)
    }

    /// Cap the estimate at `limit`.
    pub fn clamp_to(&mut self, limit: i32) {
        if self.steps > limit {
            self.steps = limit;
        }
    }
}
