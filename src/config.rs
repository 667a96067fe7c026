//! Startup configuration
//!
//! Every field has a built-in default, so the game runs with no config file
//! at all. An optional RON file (`assets/game.ron`) overrides whichever
//! fields it names:
//!
//! ```ron
//! (
//!     camera_zoom: 4.0,
//!     seed: Some(42),
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::GameError;

/// Default location of the override file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/game.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Initial (and constant) camera zoom
    pub camera_zoom: f32,
    /// Directory holding player.png, troll.png, goblin.png
    pub resource_dir: PathBuf,
    pub troll_count: usize,
    pub goblin_count: usize,
    /// Enemies spawn at integer positions in `0..=spawn_extent` on each axis
    pub spawn_extent: i32,
    /// Fixed RNG seed for reproducible spawns; None seeds from entropy
    pub seed: Option<u64>,
    /// Draw hover bounds around entities under the pointer
    pub debug_bounds: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Tileward".to_string(),
            window_width: 800,
            window_height: 450,
            camera_zoom: 3.0,
            resource_dir: PathBuf::from("assets/resources"),
            troll_count: 2,
            goblin_count: 2,
            spawn_extent: 200,
            seed: None,
            debug_bounds: false,
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text.
    pub fn from_ron(s: &str) -> Result<Self, GameError> {
        Ok(ron::from_str(s)?)
    }

    /// Read a config file. Errors if it is missing or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Read a config file, falling back to defaults when it is missing.
    /// A file that exists but does not parse is reported and ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
