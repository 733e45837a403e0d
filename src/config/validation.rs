//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Conversion factors and step intervals are positive
/// - Minimum move rates fall in (0, 1000] microns/sec
/// - Travel limits are valid (min < max)
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, focuser) in config.focusers.iter() {
        validate_focuser(name.as_str(), focuser)?;
    }

    Ok(())
}

fn validate_focuser(_name: &str, config: &super::FocuserConfig) -> Result<()> {
    // Steps per micron must be positive
    if config.steps_per_micron <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMicron(
            config.steps_per_micron,
        )));
    }

    // Step interval must be positive
    if config.step_interval_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidStepInterval(
            config.step_interval_ms,
        )));
    }

    // Minimum rate must be positive and no faster than the 1000 microns/sec cap
    if config.min_rate.0 <= 0.0 || config.min_rate.0 > 1000.0 {
        return Err(Error::Config(ConfigError::InvalidMinRate(config.min_rate.0)));
    }

    // Travel limits: min must be < max
    if !config.limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidTravelLimits {
            min: config.limits.min.0,
            max: config.limits.max.0,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Microns, MicronsPerSec};
    use crate::config::{FocuserConfig, Phase, TravelLimits};

    fn valid_config() -> FocuserConfig {
        FocuserConfig {
            name: heapless::String::try_from("test").unwrap(),
            steps_per_micron: 1.0,
            step_interval_ms: 10,
            min_rate: MicronsPerSec(1.0),
            invert_direction: false,
            phase: Phase::One,
            nv_address: 0,
            nv_power_address: None,
            power_per_mm_sec: 100,
            limits: TravelLimits::new(Microns(0.0), Microns(25000.0)),
        }
    }

    #[test]
    fn test_valid_focuser() {
        assert!(validate_focuser("test", &valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_steps_per_micron() {
        let mut config = valid_config();
        config.steps_per_micron = 0.0;

        let result = validate_focuser("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerMicron(_)))
        ));
    }

    #[test]
    fn test_invalid_step_interval() {
        let mut config = valid_config();
        config.step_interval_ms = 0;

        let result = validate_focuser("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepInterval(0)))
        ));
    }

    #[test]
    fn test_invalid_min_rate() {
        let mut config = valid_config();
        config.min_rate = MicronsPerSec(1500.0);

        let result = validate_focuser("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidMinRate(_)))
        ));
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = valid_config();
        config.limits = TravelLimits::new(Microns(100.0), Microns(50.0));

        let result = validate_focuser("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidTravelLimits { .. }))
        ));
    }
}
