//! Runtime settings for the binary
//!
//! Loaded from an optional JSON file; every field has a sensible default so
//! the file is never required. A corrupt file is logged and ignored rather
//! than aborting startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings consumed by the demo binary; the simulation itself takes no
/// configuration beyond its seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; omitted means seed from the system clock
    pub seed: Option<u64>,
    /// Stop the demo loop after this many ticks (0 = run forever)
    pub max_ticks: u64,
    /// Override the high-score file location
    pub highscore_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 60 * 60, // one minute of play
            highscore_path: None,
        }
    }
}

impl Settings {
    /// Load from a JSON file; missing or invalid files yield defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("invalid settings file {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
