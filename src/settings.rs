//! Game settings and preferences
//!
//! Persisted as JSON next to the executable's working directory, separately
//! from any run state.

use serde::{Deserialize, Serialize};

use crate::sim::DifficultyPolicy;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty scaling rule used for new runs
    pub difficulty: DifficultyPolicy,
    /// Let the demo-mode AI play instead of the input source
    pub autopilot: bool,
    /// Seconds between status lines while a run is in progress (0 = quiet)
    pub status_interval_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyPolicy::default(),
            autopilot: true,
            status_interval_secs: 1.0,
        }
    }
}

impl Settings {
    /// Settings file name, resolved against the working directory
    const FILE_NAME: &'static str = "oxygen_run_settings.json";

    /// Load settings, falling back to defaults on a missing or corrupt file
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE_NAME, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
