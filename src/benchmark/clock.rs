//! Monotonic time source for chip timings

use std::time::{Duration, Instant};

/// A monotonic clock
///
/// `now` returns the time since an arbitrary fixed origin; only differences
/// between two readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;

    /// Seconds elapsed since an earlier reading, never negative
    fn seconds_since(&self, start: Duration) -> f64 {
        self.now().saturating_sub(start).as_secs_f64()
    }
}

/// Wall-clock time from `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
