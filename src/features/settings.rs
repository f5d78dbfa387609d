//! Preview settings persistence
//!
//! Handles saving and loading the preview's display and ring options.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::animation::Easing;

/// Preview settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Progress ring settings
    #[serde(default)]
    pub ring: RingSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Skip value animations entirely
    pub reduce_motion: bool,
}

/// Progress ring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    /// Widget diameter
    pub size: f32,
    /// Value that fills the ring
    pub max_value: f32,
    /// Stroke width of both rings
    pub indicator_thickness: f32,
    pub animation_duration_ms: u64,
    pub animation_delay_ms: u64,
    /// Curve applied to value animations
    pub easing: Easing,
    /// Smallest value the "Change" button picks
    pub random_min: u32,
    /// Largest value the "Change" button picks (inclusive)
    pub random_max: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            size: 180.0,
            max_value: 150.0,
            indicator_thickness: 28.0,
            animation_duration_ms: 1000,
            animation_delay_ms: 0,
            easing: Easing::FastOutSlowIn,
            random_min: 1,
            random_max: 150,
        }
    }
}

impl RingSettings {
    /// Inclusive range for random values, tolerating swapped bounds
    pub fn random_range(&self) -> RangeInclusive<u32> {
        if self.random_min <= self.random_max {
            self.random_min..=self.random_max
        } else {
            self.random_max..=self.random_min
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ringlet", "Ringlet")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::info!("No settings at {:?} ({}), using defaults", path, e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
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

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
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

    /// Duration and delay for value animations
    pub fn animation_timing(&self) -> (Duration, Duration) {
        if self.display.reduce_motion {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (
                Duration::from_millis(self.ring.animation_duration_ms),
                Duration::from_millis(self.ring.animation_delay_ms),
            )
        }
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
