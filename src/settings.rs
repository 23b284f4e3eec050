//! Host settings and preferences
//!
//! Loaded from a JSON file. Gameplay geometry is fixed in [`crate::consts`]
//! and never read from here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Logical frames per second
    pub frame_rate: u32,
    /// Maximum catch-up frames per host tick
    pub max_catch_up: u32,
    /// Headless run stops after this many frames
    pub max_frames: u64,
    /// Sleep between ticks to run at real-time speed
    pub realtime: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: 60,
            max_catch_up: 8,
            max_frames: 60 * 60 * 5,
            realtime: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read settings from {}: {}", path.display(), err);
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Invalid settings in {}: {}", path.display(), err);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Pull out-of-range values back into range
    fn sanitize(&mut self) {
        if self.frame_rate == 0 {
            log::warn!("frame_rate must be positive, using 60");
            self.frame_rate = 60;
        }
        self.max_catch_up = self.max_catch_up.max(1);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.muted);
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.max_catch_up, 8);
    }

    #[test]
    fn test_sanitize() {
        let settings =
            Settings::from_json(r#"{ "frame_rate": 0, "master_volume": 3.0, "max_catch_up": 0 }"#)
                .unwrap();
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.max_catch_up, 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            seed: Some(42),
            realtime: true,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/breakem/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("breakem-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "seed": 11, "max_frames": 100 }"#).unwrap();
        let settings = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(settings.seed, Some(11));
        assert_eq!(settings.max_frames, 100);
    }
}
