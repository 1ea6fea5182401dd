//! Player preferences
//!
//! Stored as JSON in LocalStorage, apart from the best score.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use crate::persistence::LocalStorageStore;
use crate::theme::ThemeName;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Palette used by the renderer
    pub theme: ThemeName,
    /// Draw jump and crash particles
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            particles: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_sky_settings";

    /// Parse stored settings; anything unreadable yields defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Stored preferences, or defaults when nothing usable is stored
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match LocalStorageStore::read_string(Self::STORAGE_KEY) {
            Some(json) => {
                let settings = Self::from_json(&json);
                log::info!("Settings restored (theme {})", settings.theme);
                settings
            }
            None => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let saved = serde_json::to_string(self)
            .map(|json| LocalStorageStore::write_string(Self::STORAGE_KEY, &json))
            .unwrap_or(false);
        if !saved {
            log::warn!("Settings not saved");
        }
    }

    /// Native runs keep preferences for the process only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "theme": "sunset" }"#);
        assert_eq!(settings.theme, ThemeName::Sunset);
        assert!(settings.particles);
    }

    #[test]
    fn test_unknown_theme_in_storage_falls_back() {
        let settings = Settings::from_json(r#"{ "theme": "neon", "particles": false }"#);
        assert_eq!(settings, Settings::default());
    }
}
