//! # focuser-motion
//!
//! Polled motion control for DC-motor-driven focusers with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define focuser axes in TOML files
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR/EN, `SetDutyCycle` for drive power
//! - **no_std compatible**: Core library works without standard library
//! - **Fixed-point target tracking**: Sub-step motion rates without floats in the hot path
//! - **Wear-aware persistence**: Position written to non-volatile storage only once motion settles
//! - **Cooperative polling**: No timers, threads, or blocking calls; the host scheduler sets the pace
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focuser_motion::{Focuser, Steps, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = focuser_motion::load_config("focusers.toml")?;
//!
//! // Bind hardware and build the controller
//! let mut focuser = Focuser::builder()
//!     .driver(driver)
//!     .store(store)
//!     .clock(clock)
//!     .from_config(&config, "primary")?
//!     .build()?;
//!
//! // Command motion, then keep ticking from the control loop:
//! focuser.set_target(Steps(4200));
//! loop {
//!     focuser.advance_target(); // at the 100 Hz accumulator cadence
//!     focuser.follow(false);    // every control cycle
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt support for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod focuser;
pub mod hal;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, FocuserConfig, Phase, SystemConfig};
pub use error::{Error, Result};
pub use focuser::{Focuser, FocuserBuilder, PowerState, TemperatureCompensation};
pub use hal::{DcDriver, MonotonicClock, NonVolatileStore, PinDriver};
pub use motion::FixedPoint;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Microns, MicronsPerSec, Steps};
