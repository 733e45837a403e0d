//! Travel limit configuration and types.
//!
//! Limits always clamp: an out-of-range command lands on the nearest bound
//! rather than being rejected.

use serde::Deserialize;

use super::units::{Microns, Steps};

/// Travel limits in microns (from configuration).
#[derive(Debug, Clone, Deserialize)]
pub struct TravelLimits {
    /// Minimum allowed position in microns.
    #[serde(rename = "min_microns")]
    pub min: Microns,

    /// Maximum allowed position in microns.
    #[serde(rename = "max_microns")]
    pub max: Microns,
}

impl TravelLimits {
    /// Create new travel limits.
    pub fn new(min: Microns, max: Microns) -> Self {
        Self { min, max }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min.0 < self.max.0
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position: Microns) -> bool {
        position.0 >= self.min.0 && position.0 <= self.max.0
    }
}

/// Travel limits converted to steps (for runtime use).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepLimits {
    /// Minimum position in steps.
    pub min_steps: i64,
    /// Maximum position in steps.
    pub max_steps: i64,
}

impl StepLimits {
    /// Create step limits from travel limits and steps per micron.
    pub fn from_travel_limits(travel: &TravelLimits, steps_per_micron: f32) -> Self {
        Self {
            min_steps: Steps::from_microns(travel.min, steps_per_micron).0,
            max_steps: Steps::from_microns(travel.max, steps_per_micron).0,
        }
    }

    /// Check if a position is within limits.
    #[inline]
    pub fn contains(&self, steps: i64) -> bool {
        steps >= self.min_steps && steps <= self.max_steps
    }

    /// Clamp a position to the nearest limit.
    #[inline]
    pub fn clamp(&self, steps: i64) -> i64 {
        steps.clamp(self.min_steps, self.max_steps)
    }
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            min_steps: 0,
            max_steps: 1000,
        }
    }
}
