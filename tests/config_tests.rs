//! Configuration parsing and validation tests.

use focuser_motion::config::parse_config;
use focuser_motion::error::{ConfigError, Error};
use focuser_motion::Phase;

const MINIMAL_CONFIG: &str = r#"
[focusers.primary]
name = "Primary"
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
nv_address = 200

[focusers.primary.limits]
min_microns = 0.0
max_microns = 25000.0
"#;

#[test]
fn parse_minimal_config_applies_defaults() {
    let config = parse_config(MINIMAL_CONFIG).expect("Should parse minimal config");

    let focuser = config.focuser("primary").expect("Focuser should exist");
    assert_eq!(focuser.name.as_str(), "Primary");
    assert!((focuser.steps_per_micron - 1.0).abs() < 0.001);
    assert!(!focuser.invert_direction);
    assert_eq!(focuser.phase, Phase::One);
    assert_eq!(focuser.nv_power_address, None);
    assert_eq!(focuser.power_per_mm_sec, 100);
}

#[test]
fn parse_phase_values() {
    for (phase_str, expected) in [("one", Phase::One), ("two", Phase::Two)] {
        let toml = format!(
            r#"
[focusers.f1]
name = "Focuser"
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
phase = "{phase_str}"
nv_address = 0

[focusers.f1.limits]
min_microns = 0.0
max_microns = 1000.0
"#
        );

        let config = parse_config(&toml)
            .unwrap_or_else(|_| panic!("Phase '{}' should parse", phase_str));
        assert_eq!(config.focuser("f1").unwrap().phase, expected);
    }
}

#[test]
fn unknown_focuser_returns_none() {
    let config = parse_config(MINIMAL_CONFIG).unwrap();
    assert!(config.focuser("nonexistent").is_none());
}

#[test]
fn reject_zero_step_interval() {
    let toml = r#"
[focusers.f1]
name = "Focuser"
step_interval_ms = 0
min_rate_microns_per_sec = 1.0
nv_address = 0

[focusers.f1.limits]
min_microns = 0.0
max_microns = 1000.0
"#;

    let result = parse_config(toml);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepInterval(0)))
    ));
}

#[test]
fn reject_non_positive_steps_per_micron() {
    let toml = r#"
[focusers.f1]
name = "Focuser"
steps_per_micron = -2.0
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
nv_address = 0

[focusers.f1.limits]
min_microns = 0.0
max_microns = 1000.0
"#;

    let result = parse_config(toml);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerMicron(_)))
    ));
}

#[test]
fn reject_min_rate_above_cap() {
    let toml = r#"
[focusers.f1]
name = "Focuser"
step_interval_ms = 10
min_rate_microns_per_sec = 1500.0
nv_address = 0

[focusers.f1.limits]
min_microns = 0.0
max_microns = 1000.0
"#;

    let result = parse_config(toml);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMinRate(_)))
    ));
}

#[test]
fn reject_inverted_travel_limits() {
    let toml = r#"
[focusers.f1]
name = "Focuser"
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
nv_address = 0

[focusers.f1.limits]
min_microns = 2000.0
max_microns = 1000.0
"#;

    let result = parse_config(toml);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTravelLimits { .. }))
    ));
}

#[test]
fn reject_malformed_toml() {
    let result = parse_config("not valid [toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}
