//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use focuser_motion::load_config;
///
/// let config = load_config("focusers.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[focusers.primary]
name = "Primary"
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
nv_address = 200

[focusers.primary.limits]
min_microns = 0.0
max_microns = 25000.0
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.focuser("primary").is_some());
    }

    #[test]
    fn test_parse_rejects_inverted_limits() {
        let toml = r#"
[focusers.primary]
name = "Primary"
step_interval_ms = 10
min_rate_microns_per_sec = 1.0
nv_address = 200

[focusers.primary.limits]
min_microns = 25000.0
max_microns = 0.0
"#;

        assert!(parse_config(toml).is_err());
    }
}
