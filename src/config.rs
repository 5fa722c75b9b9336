use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::colors::Color;

// actual size of the window
pub const SCREEN_WIDTH: i32 = 130;
pub const SCREEN_HEIGHT: i32 = 60;

// size of the map
pub const MAP_WIDTH: i32 = 80;
pub const MAP_HEIGHT: i32 = 45;

pub const LIMIT_FPS: i32 = 20; // 20 frames-per-second maximum

pub const TITLE: &str = "PHANTASY STAR ROGUE";
pub const FONT: &str = "arial10x10.png";

pub const COLOR_DARK_WALL: Color = Color { r: 0, g: 0, b: 100 };
pub const COLOR_DARK_GROUND: Color = Color { r: 50, g: 50, b: 150 };

pub const SETTINGS_FILE: &str = "settings.json";
pub const SETTINGS_ENV: &str = "ROGUE_SETTINGS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse settings in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Startup configuration. Any field missing from the settings file keeps its
/// default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub title: String,
    pub font: String,
    pub screen_width: i32,
    pub screen_height: i32,
    pub map_width: i32,
    pub map_height: i32,
    pub limit_fps: i32,
    pub fullscreen: bool,
    /// Wait for a key press every frame instead of polling.
    pub turn_based: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: TITLE.into(),
            font: FONT.into(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            limit_fps: LIMIT_FPS,
            fullscreen: false,
            turn_based: true,
        }
    }
}

impl Settings {
    /// `$ROGUE_SETTINGS`, or `settings.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        let settings = Settings::from_json(&json).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_owned(),
                source,
            },
            e => e,
        })?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size {}x{} must be positive",
                self.screen_width, self.screen_height
            )));
        }
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "map size {}x{} must be positive",
                self.map_width, self.map_height
            )));
        }
        if self.map_width > self.screen_width || self.map_height > self.screen_height {
            return Err(ConfigError::Invalid(format!(
                "map {}x{} does not fit on a {}x{} screen",
                self.map_width, self.map_height, self.screen_width, self.screen_height
            )));
        }
        if self.limit_fps <= 0 {
            return Err(ConfigError::Invalid("limit_fps must be positive".into()));
        }
        Ok(())
    }
}
