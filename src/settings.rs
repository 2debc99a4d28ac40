//! Game settings
//!
//! Read from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::platform::input::Key;

/// Which keys drive which commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub thrust_forward: Key,
    pub thrust_backward: Key,
    /// Held to reset the session
    pub reset: Key,
    /// Asks the render collaborator to rebuild its shaders
    pub recompile_shader: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            thrust_forward: Key::Up,
            thrust_backward: Key::Down,
            reset: Key::Char('j'),
            recompile_shader: Key::Char('r'),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_title: String,

    // === Session ===
    /// Fixed RNG seed; wall-clock time when absent
    pub seed: Option<u64>,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 800,
            window_title: "Diamond Orbit".to_string(),
            seed: None,
            max_frames: None,
            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Cursor normalization divides by (dimension - 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width < 2 || self.screen_height < 2 {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bindings.thrust_forward, Key::Up);
        assert_eq!(settings.bindings.reset, Key::Char('j'));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "bindings": { "reset": { "Char": "x" } } }"#)
            .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.screen_width, 800);
        assert_eq!(settings.bindings.reset, Key::Char('x'));
        assert_eq!(settings.bindings.thrust_forward, Key::Up);
    }

    #[test]
    fn test_rejects_tiny_screen() {
        let err = Settings::from_json(r#"{ "screen_width": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScreen { width: 1, height: 800 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("diamond-orbit-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(3),
            max_frames: Some(100),
            ..Settings::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
