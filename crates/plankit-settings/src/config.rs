//! Configuration for the measuring engine.
//!
//! Settings are stored as JSON in the platform config directory and
//! organized into logical sections:
//! - Panel defaults (size, unit)
//! - Editing preferences (snap tolerance, handle hit radius)
//! - View preferences (window dimensions)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use plankit_core::units::Unit;

use crate::error::{SettingsError, SettingsResult};

/// Default panel size offered when packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Panel width in real-world units.
    pub panel_width: f64,
    /// Panel height in real-world units.
    pub panel_height: f64,
    /// Unit the panel dimensions are expressed in.
    pub unit: Unit,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 1.2,
            panel_height: 0.6,
            unit: Unit::M,
        }
    }
}

/// Vertex editing preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditingSettings {
    /// Angle-snap tolerance in degrees, 0 to 30.
    pub snap_tolerance_deg: f64,
    /// Hit-test radius around vertex handles, in device pixels.
    pub hit_radius_px: f64,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            snap_tolerance_deg: 3.0,
            hit_radius_px: 8.0,
        }
    }
}

/// View preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panels: PanelSettings,
    #[serde(default)]
    pub editing: EditingSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

impl Config {
    /// Platform config file path, e.g. `~/.config/plankit/settings.json`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        path.push("plankit");
        path.push("settings.json");
        Ok(path)
    }

    /// Load config from a JSON file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("failed to read {:?}: {}", path, e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SettingsError::LoadError(format!("invalid JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default path, falling back to defaults when
    /// the file does not exist yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a JSON file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("failed to write {:?}: {}", path, e)))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.panels.panel_width.is_finite() && self.panels.panel_width > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "panel_width".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !(self.panels.panel_height.is_finite() && self.panels.panel_height > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "panel_height".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !(0.0..=30.0).contains(&self.editing.snap_tolerance_deg) {
            return Err(SettingsError::InvalidSetting {
                key: "snap_tolerance_deg".to_string(),
                reason: "must be between 0 and 30".to_string(),
            });
        }
        if !(self.editing.hit_radius_px.is_finite() && self.editing.hit_radius_px > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "hit_radius_px".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if self.view.window_width == 0 || self.view.window_height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "window_width".to_string(),
                reason: "window dimensions must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
