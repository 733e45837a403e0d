//! Monotonic millisecond clock source.

/// A monotonic millisecond clock.
///
/// The controller never sleeps; all pacing is done by reading this clock
/// and comparing elapsed deltas. The same clock instance must back every
/// call into a controller, or deadline arithmetic is meaningless.
pub trait MonotonicClock {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn millis(&self) -> u64;
}

impl<C: MonotonicClock> MonotonicClock for &C {
    fn millis(&self) -> u64 {
        (*self).millis()
    }
}

/// Clock backed by [`std::time::Instant`] (std only).
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock with its origin at the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for StdClock {
    fn millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
