//! Hardware abstraction for focuser-motion.
//!
//! Traits for the three external collaborators (DC driver, non-volatile
//! store, millisecond clock) plus a concrete embedded-hal pin driver.

mod clock;
mod driver;
mod nv;

pub use clock::MonotonicClock;
pub use driver::{DcDriver, PinDriver};
pub use nv::NonVolatileStore;

#[cfg(feature = "std")]
pub use clock::StdClock;
