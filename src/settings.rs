//! Game settings and preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::platform::storage;
use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used for the next run
    pub difficulty: Difficulty,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (lane markers hold still)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "lane_dodger_settings";

    /// Whether lane markers should scroll
    pub fn animate_markers(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from LocalStorage (defaults on native or when absent)
    pub fn load() -> Self {
        match storage::load_json(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (no-op on native)
    pub fn save(&self) {
        if storage::save_json(Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(!settings.reduced_motion);
        assert!(settings.animate_markers());
    }

    #[test]
    fn test_autopilot_is_not_persisted() {
        // Older saves carried an autopilot flag; it is ignored now
        let settings: Settings =
            serde_json::from_str(r#"{"difficulty":"easy","demo_when_idle":true}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("demo_when_idle"));
    }

    #[test]
    fn test_reduced_motion_stops_markers() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.animate_markers());
    }

    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }
}
