//! Monotonic time source.

/// Free-running microsecond counter.
///
/// Must never go backwards. Wrap-around is not handled: a 64-bit microsecond
/// counter outlives the device.
pub trait MonotonicClock {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_us(&self) -> u64 {
        T::now_us(self)
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for std::time::Instant {
    /// Time elapsed since this instant was captured.
    fn now_us(&self) -> u64 {
        u64::try_from(self.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
