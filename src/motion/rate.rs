//! Rate conversion for the target accumulator.

use super::fixed::FixedPoint;

/// Cadence at which the host scheduler is expected to call
/// [`Focuser::advance_target`](crate::Focuser::advance_target).
///
/// The per-tick delta is scaled for this rate; the physical step pacing is
/// independent of it and self-times against the millisecond clock.
pub const TARGET_TICKS_PER_SEC: f32 = 100.0;

/// Convert a step rate into the signed per-tick target increment.
///
/// Rates below one step per tick land entirely in the fractional part and
/// accumulate into whole steps across ticks.
#[inline]
pub fn per_tick_delta(steps_per_sec: f32) -> FixedPoint {
    FixedPoint::from_f32(steps_per_sec / TARGET_TICKS_PER_SEC)
}
