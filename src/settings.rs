//! Runtime settings
//!
//! Loaded from a JSON file next to the binary; anything missing falls back
//! to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scene::Scene;
use crate::tuning::Tuning;

/// Default settings file name
pub const SETTINGS_FILE: &str = "wave_survivor.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game balance
    pub tuning: Tuning,

    // === Debug ===
    /// Pin the scene every frame (skip intro/menu while iterating on gameplay)
    pub force_scene: Option<Scene>,
    /// Fixed RNG seed for reproducible runs; random when unset
    pub seed: Option<u64>,

    // === Headless driver ===
    /// Frames the headless driver simulates before exiting
    pub demo_frames: u32,
    /// Fixed frame step for the headless driver (seconds)
    pub demo_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            force_scene: None,
            seed: None,
            demo_frames: 60 * 120,
            demo_frame_dt: 1.0 / 60.0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
