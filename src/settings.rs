//! Persistent settings for game initialization
//!
//! Saves and loads user preferences (start scene, window size)
//! to/from an init_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_START_SCENE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    /// Scene loaded at startup (overridden by --scene)
    pub start_scene: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            start_scene: DEFAULT_START_SCENE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

impl InitSettings {
    /// Load settings from the default file, or return defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(Path::new(SETTINGS_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: InitSettings = serde_json::from_str(r#"{"start_scene": "Level2"}"#).unwrap();
        assert_eq!(settings.start_scene, "Level2");
        assert_eq!(settings.window_width, WINDOW_WIDTH);
        assert_eq!(settings.window_height, WINDOW_HEIGHT);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("kitchen_chores_settings_{}", std::process::id()));
        let path = dir.join("init_settings.json");

        let settings = InitSettings {
            start_scene: "Level2".to_string(),
            window_width: 800,
            window_height: 600,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(InitSettings::load_from(&path), settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("kitchen_chores_garbage_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("init_settings.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(InitSettings::load_from(&path), InitSettings::default());

        let _ = fs::remove_dir_all(&dir);
    }
}
