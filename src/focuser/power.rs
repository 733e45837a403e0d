//! Driver enable lifecycle.

/// Enable state of the output stage across motion start/stop.
///
/// `Moving -> Idle` is never immediate: when motion stops the controller
/// holds the driver enabled through a short settling window, so motion that
/// stops and restarts quickly does not chatter the enable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Driver disabled, no motion pending.
    #[default]
    Idle,
    /// Driver enabled and being polled for steps.
    Moving,
    /// Motion stopped; driver still enabled until the debounce window elapses.
    Settling,
}

impl PowerState {
    /// True while the output stage is enabled.
    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, PowerState::Idle)
    }
}
