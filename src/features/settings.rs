//! Application settings persistence
//!
//! Handles loading the JSON settings file.

use std::path::{Path, PathBuf};

use iced::time::Duration;
use serde::{Deserialize, Serialize};

use crate::ui::animation::EasingPreset;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Border progress animation
    #[serde(default)]
    pub animation: AnimationSettings,
    /// Border progress geometry
    #[serde(default)]
    pub border: BorderSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Skip animations; values jump straight to their target
    #[serde(default)]
    pub power_saving_mode: bool,
}

/// Animation-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Length of one border animation run
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingPreset,
    /// Delay between startup and the collapse trigger
    #[serde(default = "default_trigger_delay_ms")]
    pub trigger_delay_ms: u64,
}

/// Border indicator geometry
///
/// A radius above half the inner height is clamped, giving a pill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderSettings {
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    900
}

fn default_trigger_delay_ms() -> u64 {
    400
}

fn default_corner_radius() -> f32 {
    100.0
}

fn default_stroke_width() -> f32 {
    2.0
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            power_saving_mode: false,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: EasingPreset::default(),
            trigger_delay_ms: default_trigger_delay_ms(),
        }
    }
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            corner_radius: default_corner_radius(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl AnimationSettings {
    /// Tween duration; zero when animations are disabled
    pub fn duration(&self, power_saving: bool) -> Duration {
        if power_saving {
            Duration::ZERO
        } else {
            Duration::from_millis(self.duration_ms)
        }
    }

    pub fn trigger_delay(&self) -> Duration {
        Duration::from_millis(self.trigger_delay_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "progress-gallery", "ProgressGallery")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::debug!("No config directory available, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Settings file {:?} not found, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    #[cfg(test)]
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
