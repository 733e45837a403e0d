//! Focuser axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::{StepLimits, TravelLimits};
use super::units::MicronsPerSec;

/// Winding phase selector for the DC driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Phase 1 drive (default).
    #[default]
    One,
    /// Phase 2 drive (inverted half-bridge mapping).
    Two,
}

/// Complete focuser axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct FocuserConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Steps of actuator travel per micron of focus motion.
    #[serde(default = "default_steps_per_micron")]
    pub steps_per_micron: f32,

    /// Minimum time between physical steps in milliseconds (the motor's
    /// maximum electrical/mechanical step rate, inverted).
    pub step_interval_ms: u32,

    /// Slowest commandable move rate in microns per second.
    #[serde(rename = "min_rate_microns_per_sec")]
    pub min_rate: MicronsPerSec,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Winding phase to apply while moving.
    #[serde(default)]
    pub phase: Phase,

    /// Non-volatile address holding the persisted position.
    pub nv_address: u32,

    /// Optional non-volatile address holding the drive power level.
    #[serde(default)]
    pub nv_power_address: Option<u32>,

    /// Drive power (0-255) needed for 1 mm/sec of motion.
    #[serde(default = "default_power_per_mm_sec")]
    pub power_per_mm_sec: u8,

    /// Travel limits.
    pub limits: TravelLimits,
}

fn default_steps_per_micron() -> f32 {
    1.0
}

fn default_power_per_mm_sec() -> u8 {
    100
}

impl FocuserConfig {
    /// Maximum physical step rate in steps per second, derived from the
    /// minimum inter-step interval.
    pub fn max_steps_per_sec(&self) -> f32 {
        (1.0 / self.step_interval_ms as f32) * 1000.0
    }

    /// Travel limits converted to steps.
    pub fn step_limits(&self) -> StepLimits {
        StepLimits::from_travel_limits(&self.limits, self.steps_per_micron)
    }
}
