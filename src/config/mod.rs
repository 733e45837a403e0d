//! Configuration module for focuser-motion.
//!
//! Provides types for loading and validating focuser axis configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod focuser;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use focuser::{FocuserConfig, Phase};
pub use limits::{StepLimits, TravelLimits};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microns, MicronsPerSec, Steps};
