//! Builder pattern for Focuser.

use crate::config::{FocuserConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::hal::{DcDriver, MonotonicClock, NonVolatileStore};

use super::controller::Focuser;

/// Builder for creating [`Focuser`] instances.
///
/// Binds the three hardware handles and a configured axis, then constructs
/// an initialized controller.
pub struct FocuserBuilder<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    driver: Option<D>,
    store: Option<S>,
    clock: Option<C>,
    config: Option<FocuserConfig>,
}

impl<D, S, C> Default for FocuserBuilder<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, S, C> FocuserBuilder<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            driver: None,
            store: None,
            clock: None,
            config: None,
        }
    }

    /// Bind the motor driver.
    pub fn driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Bind the non-volatile store.
    pub fn store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    /// Bind the millisecond clock.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Configure from a FocuserConfig.
    pub fn focuser_config(mut self, config: &FocuserConfig) -> Self {
        self.config = Some(config.clone());
        self
    }

    /// Configure from a SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, name: &str) -> Result<Self> {
        let focuser_config = config.focuser(name).ok_or_else(|| {
            Error::Config(ConfigError::FocuserNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        Ok(self.focuser_config(focuser_config))
    }

    /// Build the Focuser.
    ///
    /// The controller is initialized: the persisted position is recovered
    /// and clamped, the default move rate set, and the step deadline armed.
    ///
    /// # Errors
    ///
    /// Returns an error if a hardware handle or the configuration is missing.
    pub fn build(self) -> Result<Focuser<D, S, C>> {
        let driver = self.driver.ok_or_else(|| missing("driver"))?;
        let store = self.store.ok_or_else(|| missing("store"))?;
        let clock = self.clock.ok_or_else(|| missing("clock"))?;
        let config = self.config.ok_or_else(|| missing("config"))?;

        let mut focuser = Focuser::new(driver, store, clock);
        focuser.init(&config);
        Ok(focuser)
    }
}

fn missing(field: &str) -> Error {
    Error::Config(ConfigError::MissingField(
        heapless::String::try_from(field).unwrap_or_default(),
    ))
}
