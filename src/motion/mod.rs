//! Motion module for focuser-motion.
//!
//! Provides the fixed-point target accumulator and rate conversion.

mod fixed;
mod rate;

pub use fixed::FixedPoint;
pub use rate::{per_tick_delta, TARGET_TICKS_PER_SEC};
