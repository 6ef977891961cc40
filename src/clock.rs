//! Time sources for rep debouncing.
//!
//! Timestamps are monotonic offsets from the clock's origin, so wall-clock
//! adjustments never affect the debounce interval.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Source of "now" for the rep counter
pub trait Clock: Send + Debug {
    /// Elapsed time since the clock's origin
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by `std::time::Instant`, with its origin at creation
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven clock, used for replaying recorded streams and in tests
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed_nanos: AtomicU64,
}

impl ManualClock {
    /// Clock starting at its origin
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `elapsed` past its origin
    #[must_use]
    pub fn starting_at(elapsed: Duration) -> Self {
        let clock = Self::new();
        clock.set(elapsed);
        clock
    }

    /// Move the clock to `elapsed`. Moving backwards is allowed.
    pub fn set(&self, elapsed: Duration) {
        self.elapsed_nanos.store(to_nanos(elapsed), Ordering::Relaxed);
    }

    /// Advance the clock by `delta`, saturating at the maximum representable time
    pub fn advance(&self, delta: Duration) {
        let delta = to_nanos(delta);
        let _ = self
            .elapsed_nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(delta))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::Relaxed))
    }
}

fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
