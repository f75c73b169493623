//! Game settings
//!
//! Tunables for the window, the simulation and the hero, stored as RON in
//! `data/settings.ron`. Every field has a default so a partial file (or no
//! file at all) still yields a playable configuration.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::world::limits;

/// Default location of the settings file
pub const SETTINGS_PATH: &str = "data/settings.ron";

/// Error type for settings loading and saving
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::SerializeError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// All tunables, with the values the game ships with as defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Simulation ticks per second (also the frame cap)
    pub tick_rate: u32,
    /// Window size in pixels
    pub screen_width: i32,
    pub screen_height: i32,
    /// Edge length of a level tile in pixels
    pub tile_size: i32,
    /// Downward acceleration (units per second squared)
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_speed: f32,
    /// Horizontal speed while a direction is held
    pub run_speed: f32,
    /// Screen size is divided by this to place the hero in the viewport.
    /// Slightly more than 2, so the hero sits left of and above center.
    pub camera_divisor: f32,
    /// Hero spawn point in world pixels
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Level file name, relative to the data directory
    pub level_file: String,
    /// Trace collision decisions every tick
    pub debug_log: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tick_rate: 30,
            screen_width: 750,
            screen_height: 500,
            tile_size: 50,
            gravity: 100.0,
            jump_speed: -800.0,
            run_speed: 100.0,
            camera_divisor: 2.24,
            spawn_x: 50.0,
            spawn_y: 612.0,
            level_file: "map.map".to_string(),
            debug_log: false,
        }
    }
}

impl GameSettings {
    /// Length of one simulation tick in seconds
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Check values that would break the simulation or the camera
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::ValidationError(msg));
        if self.tick_rate == 0 {
            return invalid("tick_rate must be positive".to_string());
        }
        if self.tile_size <= 0 || self.tile_size > limits::MAX_TILE_SIZE {
            return invalid(format!(
                "tile_size must be in 1..={} (got {})",
                limits::MAX_TILE_SIZE, self.tile_size
            ));
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid(format!(
                "screen size must be positive (got {}x{})",
                self.screen_width, self.screen_height
            ));
        }
        if !(self.camera_divisor.is_finite() && self.camera_divisor > 0.0) {
            return invalid(format!("camera_divisor must be positive (got {})", self.camera_divisor));
        }
        let physics = [
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("run_speed", self.run_speed),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
        ];
        for (name, value) in physics {
            if !value.is_finite() {
                return invalid(format!("{} must be finite (got {})", name, value));
            }
        }
        Ok(())
    }
}

/// Load settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GameSettings, SettingsError> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = ron::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings, falling back to defaults when the file is missing or bad
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> GameSettings {
    let path = path.as_ref();
    match load_settings(path) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(SettingsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No settings at {}, using defaults", path.display());
            GameSettings::default()
        }
        Err(e) => {
            log::warn!("Ignoring settings at {}: {}", path.display(), e);
            GameSettings::default()
        }
    }
}

/// Save settings as pretty-printed RON
pub fn save_settings<P: AsRef<Path>>(settings: &GameSettings, path: P) -> Result<(), SettingsError> {
    settings.validate()?;
    let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let ron_string = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_game() {
        let s = GameSettings::default();
        assert_eq!(s.tick_rate, 30);
        assert_eq!((s.screen_width, s.screen_height), (750, 500));
        assert_eq!(s.jump_speed, -800.0);
        assert_eq!(s.camera_divisor, 2.24);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(run_speed: 150.0, debug_log: true)").unwrap();
        let s = load_settings(&path).unwrap();
        assert_eq!(s.run_speed, 150.0);
        assert!(s.debug_log);
        assert_eq!(s.tick_rate, 30);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        let mut s = GameSettings::default();
        s.level_file = "other.map".to_string();
        s.gravity = 250.0;
        save_settings(&s, &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), s);
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(tick_rate: 0)").unwrap();
        assert!(matches!(load_settings(&path), Err(SettingsError::ValidationError(_))));
    }

    #[test]
    fn test_validation_bounds_tile_size() {
        let mut s = GameSettings::default();
        s.tile_size = 1_000_000;
        assert!(matches!(s.validate(), Err(SettingsError::ValidationError(_))));
        s.tile_size = limits::MAX_TILE_SIZE;
        assert!(s.validate().is_ok());
        s.tile_size = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(tick_rate: \"fast\"").unwrap();
        assert!(matches!(load_settings(&path), Err(SettingsError::ParseError(_))));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());
        assert_eq!(load_settings_or_default(dir.path().join("missing.ron")), GameSettings::default());
    }
}
