//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::focuser::FocuserConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named focuser axis configurations.
    pub focusers: FnvIndexMap<String<32>, FocuserConfig, 4>,
}

impl SystemConfig {
    /// Get a focuser configuration by name.
    pub fn focuser(&self, name: &str) -> Option<&FocuserConfig> {
        self.focusers
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all focuser names.
    pub fn focuser_names(&self) -> impl Iterator<Item = &str> {
        self.focusers.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            focusers: FnvIndexMap::new(),
        }
    }
}
