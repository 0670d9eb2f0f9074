//! Engine Settings
//!
//! Editor tunables persisted per user in the settings directory. A
//! missing settings file is a fresh profile and yields the defaults, so
//! the editor always starts usable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Name of the settings file inside the settings directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Camera, input and render tunables for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub camera_orbit_speed: f32,
    pub camera_pan_speed: f32,
    pub camera_zoom_speed: f32,
    /// Closest the orbit camera may zoom toward its target.
    pub camera_min_distance: f32,
    /// Farthest the orbit camera may zoom away from its target.
    pub camera_max_distance: f32,
    /// Per-frame cap on raw mouse deltas, in pixels.
    pub mouse_clamp_delta: f32,
    /// Viewport clear color, linear RGBA.
    pub clear_color: [f32; 4],
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            camera_orbit_speed: 0.3,
            camera_pan_speed: 0.002,
            camera_zoom_speed: 1.0,
            camera_min_distance: 0.5,
            camera_max_distance: 100.0,
            mouse_clamp_delta: 22.0,
            clear_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

impl EngineSettings {
    /// Loads settings from `path`, falling back to defaults when the
    /// file does not exist. Malformed JSON is reported as an error so
    /// the caller can decide between defaults and aborting.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the settings as pretty-printed JSON, replacing `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
