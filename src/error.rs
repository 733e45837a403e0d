//! Error types for focuser-motion library.
//!
//! Errors only occur at the configuration and builder boundary. Motion
//! commands never fail: out-of-range targets, rates, and positions are
//! clamped to the nearest valid bound instead of rejected.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all focuser-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Focuser name not found in configuration
    FocuserNotFound(heapless::String<32>),
    /// Required builder field missing
    MissingField(heapless::String<32>),
    /// Invalid steps-per-micron conversion factor (must be > 0)
    InvalidStepsPerMicron(f32),
    /// Invalid physical step interval (must be > 0 ms)
    InvalidStepInterval(u32),
    /// Invalid minimum move rate (must be in (0, 1000] microns/sec)
    InvalidMinRate(f32),
    /// Invalid travel limits (min must be < max)
    InvalidTravelLimits {
        /// Minimum travel in microns
        min: f32,
        /// Maximum travel in microns
        max: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::FocuserNotFound(name) => write!(f, "Focuser '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidStepsPerMicron(v) => {
                write!(f, "Invalid steps per micron: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepInterval(v) => {
                write!(f, "Invalid step interval: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidMinRate(v) => {
                write!(f, "Invalid minimum rate: {}. Must be in (0, 1000] microns/sec", v)
            }
            ConfigError::InvalidTravelLimits { min, max } => {
                write!(f, "Invalid travel limits: min ({}) must be < max ({})", min, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
