//! Host settings, stored as TOML.
//!
//! Only preferences live here. The session's buffered word is never saved.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::host::VK_F10;

pub const DEFAULT_LOG_FILTER: &str = "ime_core=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether conversion is on when the host starts.
    pub start_enabled: bool,
    /// Virtual key code of the on/off hotkey.
    pub toggle_key: u32,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_enabled: false,
            toggle_key: VK_F10,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        // Virtual key codes are a single byte; 0 is unassigned.
        if self.toggle_key == 0 || self.toggle_key > 0xFE {
            return Err(SettingsError::InvalidValue {
                field: "toggle_key",
                reason: format!("{:#x} is not a virtual key code", self.toggle_key),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
