//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Native builds read and write an
//! optional JSON file named by `RECT_RUNNER_SETTINGS`.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::input::KeyBindings;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key codes for start/jump/squat
    pub bindings: KeyBindings,
    /// Difficulty and physics constants
    pub tuning: Tuning,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rect_runner_settings";

    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "RECT_RUNNER_SETTINGS";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `RECT_RUNNER_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {e}", path.to_string_lossy());
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write settings back to the file named by `RECT_RUNNER_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            return;
        };

        match self.save_file(std::path::Path::new(&path)) {
            Ok(()) => log::info!("Settings saved to {}", path.to_string_lossy()),
            Err(e) => log::warn!("Could not save settings to {}: {e}", path.to_string_lossy()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_file(&self, path: &std::path::Path) -> Result<(), GameError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
