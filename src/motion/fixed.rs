//! Fixed-point accumulator for sub-step motion tracking.

use core::ops::{Add, AddAssign, Neg, Sub};

const FRAC_BITS: u32 = 32;
const ONE: i64 = 1 << FRAC_BITS;

/// Signed Q32.32 fixed-point value.
///
/// Holds a whole step count and a sub-step remainder in a single `i64`, so
/// addition operates on the combined word and fractional overflow carries
/// into the whole part automatically. The remainder is never discarded
/// between additions: accumulating a rate below one step per tick converges
/// without drift over any number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedPoint(i64);

impl FixedPoint {
    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// Create from a whole step count with a zero fractional part.
    ///
    /// The whole part must fit in 32 bits; focuser travel is well inside
    /// that range.
    #[inline]
    pub const fn from_whole(whole: i64) -> Self {
        Self(whole << FRAC_BITS)
    }

    /// Whole part, rounding toward negative infinity.
    #[inline]
    pub const fn whole(self) -> i64 {
        self.0 >> FRAC_BITS
    }

    /// Replace the whole part and clear the fractional remainder.
    #[inline]
    pub fn set_whole(&mut self, whole: i64) {
        self.0 = whole << FRAC_BITS;
    }

    /// Create from a float, keeping the fractional part.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value as f64 * ONE as f64) as i64)
    }

    /// Convert back to a float (for diagnostics, not the hot path).
    #[inline]
    pub fn to_f32(self) -> f32 {
        (self.0 as f64 / ONE as f64) as f32
    }

    /// True when both whole and fractional parts are zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Raw combined word.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Create from a raw combined word.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }
}

impl Add for FixedPoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for FixedPoint {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for FixedPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_extraction() {
        assert_eq!(FixedPoint::from_whole(42).whole(), 42);
        assert_eq!(FixedPoint::from_whole(-7).whole(), -7);
        assert_eq!(FixedPoint::ZERO.whole(), 0);
    }

    #[test]
    fn test_fractional_carry() {
        // 0.25 steps per tick: four ticks carry exactly one whole step
        let quarter = FixedPoint::from_f32(0.25);
        let mut acc = FixedPoint::ZERO;
        for _ in 0..4 {
            acc += quarter;
        }
        assert_eq!(acc.whole(), 1);
        assert_eq!(acc, FixedPoint::from_whole(1));
    }

    #[test]
    fn test_no_drift_over_many_ticks() {
        // 0.5 steps per tick for 10_000 ticks must land on exactly 5_000
        let half = FixedPoint::from_f32(0.5);
        let mut acc = FixedPoint::ZERO;
        for _ in 0..10_000 {
            acc += half;
        }
        assert_eq!(acc.whole(), 5_000);
    }

    #[test]
    fn test_negative_accumulation() {
        let delta = FixedPoint::from_f32(-0.1);
        let mut acc = FixedPoint::from_whole(10);
        for _ in 0..100 {
            acc += delta;
        }
        // 10 - 100 * 0.1 = 0, within one fractional quantum of rounding
        assert!(acc.whole() == 0 || acc.whole() == -1);
        assert!(acc.to_f32().abs() < 0.001);
    }

    #[test]
    fn test_set_whole_clears_fraction() {
        let mut acc = FixedPoint::from_f32(3.75);
        acc.set_whole(3);
        assert_eq!(acc, FixedPoint::from_whole(3));
    }

    #[test]
    fn test_whole_floors_toward_negative() {
        // -0.5 has whole part -1 under floor semantics
        assert_eq!(FixedPoint::from_f32(-0.5).whole(), -1);
        assert_eq!(FixedPoint::from_f32(0.5).whole(), 0);
    }
}
