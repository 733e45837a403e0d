//! Focuser controller module.
//!
//! Provides the motion state machine, the poll/follow loop, and the
//! builder that binds hardware handles to a configured axis.

mod builder;
mod controller;
mod power;
mod tcf;

pub use builder::FocuserBuilder;
pub use controller::{Focuser, WRITE_DELAY_MS};
pub use power::PowerState;
pub use tcf::TemperatureCompensation;
