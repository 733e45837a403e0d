//! Unit types for physical quantities.
//!
//! Provides type-safe representations of linear travel, move rates, and
//! motor steps to prevent unit confusion at compile time.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Linear travel in microns.
///
/// Used for configuration and user-facing API. Internally converted to [`Steps`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microns(pub f32);

impl Microns {
    /// Create a new Microns value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to millimeters.
    #[inline]
    pub fn to_millimeters(self) -> f32 {
        self.0 / 1000.0
    }
}

impl Add for Microns {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Microns {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear move rate in microns per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MicronsPerSec(pub f32);

impl MicronsPerSec {
    /// Create a new MicronsPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to a step rate using the steps-per-micron factor.
    #[inline]
    pub fn to_steps_per_sec(self, steps_per_micron: f32) -> f32 {
        self.0 * steps_per_micron
    }
}

impl Mul<f32> for MicronsPerSec {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Focuser position in steps (absolute from the inner travel stop).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to microns using the steps-per-micron factor.
    #[inline]
    pub fn to_microns(self, steps_per_micron: f32) -> Microns {
        Microns(self.0 as f32 / steps_per_micron)
    }

    /// Create from microns using the steps-per-micron factor.
    #[inline]
    pub fn from_microns(microns: Microns, steps_per_micron: f32) -> Self {
        Self(libm::roundf(microns.0 * steps_per_micron) as i64)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Microns.
    fn microns(self) -> Microns;
    /// Convert to MicronsPerSec.
    fn microns_per_sec(self) -> MicronsPerSec;
}

impl UnitExt for f32 {
    #[inline]
    fn microns(self) -> Microns {
        Microns(self)
    }

    #[inline]
    fn microns_per_sec(self) -> MicronsPerSec {
        MicronsPerSec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_from_microns_rounds() {
        // 2.0 steps per micron
        assert_eq!(Steps::from_microns(Microns(100.0), 2.0), Steps(200));
        assert_eq!(Steps::from_microns(Microns(100.3), 2.0), Steps(201));
        assert_eq!(Steps::from_microns(Microns(-100.3), 2.0), Steps(-201));
    }

    #[test]
    fn test_steps_to_microns() {
        let microns = Steps(500).to_microns(2.0);
        assert!((microns.value() - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_conversion() {
        let rate = MicronsPerSec(500.0);
        assert!((rate.to_steps_per_sec(1.0) - 500.0).abs() < 0.001);
        assert!((rate.to_steps_per_sec(4.0) - 2000.0).abs() < 0.001);
    }

    #[test]
    fn test_unit_ext() {
        assert_eq!(250.0.microns(), Microns(250.0));
        assert_eq!(10.0.microns_per_sec(), MicronsPerSec(10.0));
    }
}
