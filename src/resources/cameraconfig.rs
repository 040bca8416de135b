//! Camera and window configuration resource.
//!
//! Settings are read from an INI file. Every key is optional; missing keys
//! keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [camera]
//! viewport_width = 400
//! viewport_height = 240
//! pan_speed = 480
//! follow_axes = both
//!
//! [window]
//! width = 1200
//! height = 720
//! target_fps = 60
//!
//! [rooms]
//! layout = ./assets/rooms.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::resources::roomcamera::{CameraError, FollowAxes};

const DEFAULT_VIEWPORT_WIDTH: f32 = 400.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 240.0;
const DEFAULT_PAN_SPEED: f32 = 480.0;
const DEFAULT_WINDOW_WIDTH: u32 = 1200;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_LAYOUT_PATH: &str = "./assets/rooms.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Ini(String),
    #[error("room layout error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bad value for [{section}] {key}: {value}")]
    BadValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    /// Viewport width in world pixels.
    pub viewport_width: f32,
    /// Viewport height in world pixels.
    pub viewport_height: f32,
    /// Pan speed in pixels per second.
    pub pan_speed: f32,
    pub follow_axes: FollowAxes,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    /// Room layout JSON file.
    pub layout_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            pan_speed: DEFAULT_PAN_SPEED,
            follow_axes: FollowAxes::Both,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a default configuration reading from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(&self.config_path)?;
        self.load_from_str(&content)?;
        info!(
            "Loaded config {:?}: viewport {}x{}, pan_speed {}, follow {}, window {}x{} @ {} fps",
            self.config_path,
            self.viewport_width,
            self.viewport_height,
            self.pan_speed,
            self.follow_axes,
            self.window_width,
            self.window_height,
            self.target_fps
        );
        Ok(())
    }

    /// Load values from INI text.
    pub fn load_from_str(&mut self, content: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(content.to_string()).map_err(ConfigError::Ini)?;

        // [camera] section
        if let Some(w) = get_float(&config, "camera", "viewport_width")? {
            self.viewport_width = w as f32;
        }
        if let Some(h) = get_float(&config, "camera", "viewport_height")? {
            self.viewport_height = h as f32;
        }
        if let Some(speed) = get_float(&config, "camera", "pan_speed")? {
            self.pan_speed = speed as f32;
        }
        if let Some(axes) = config.get("camera", "follow_axes") {
            self.follow_axes = axes.parse()?;
        }

        // [window] section
        if let Some(w) = get_uint(&config, "window", "width")? {
            self.window_width = w as u32;
        }
        if let Some(h) = get_uint(&config, "window", "height")? {
            self.window_height = h as u32;
        }
        if let Some(fps) = get_uint(&config, "window", "target_fps")? {
            self.target_fps = fps as u32;
        }

        // [rooms] section
        if let Some(layout) = config.get("rooms", "layout") {
            self.layout_path = PathBuf::from(layout);
        }

        Ok(())
    }

    /// Save configuration to `config_path`, creating the file if needed.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("camera", "viewport_width", Some(self.viewport_width.to_string()));
        config.set("camera", "viewport_height", Some(self.viewport_height.to_string()));
        config.set("camera", "pan_speed", Some(self.pan_speed.to_string()));
        config.set("camera", "follow_axes", Some(self.follow_axes.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "rooms",
            "layout",
            Some(self.layout_path.to_string_lossy().into_owned()),
        );

        config.write(&self.config_path)?;
        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }
}

fn get_float(
    config: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<Option<f64>, ConfigError> {
    config.getfloat(section, key).map_err(|_| ConfigError::BadValue {
        section,
        key,
        value: config.get(section, key).unwrap_or_default(),
    })
}

fn get_uint(
    config: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    config.getuint(section, key).map_err(|_| ConfigError::BadValue {
        section,
        key,
        value: config.get(section, key).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CameraConfig::new();
        assert_eq!(config.viewport_width, 400.0);
        assert_eq!(config.viewport_height, 240.0);
        assert_eq!(config.pan_speed, 480.0);
        assert_eq!(config.follow_axes, FollowAxes::Both);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_load_partial_keeps_defaults() {
        let mut config = CameraConfig::new();
        config
            .load_from_str("[camera]\npan_speed = 240.5\nfollow_axes = horizontal\n")
            .unwrap();
        assert_eq!(config.pan_speed, 240.5);
        assert_eq!(config.follow_axes, FollowAxes::Horizontal);
        assert_eq!(config.viewport_width, 400.0);
        assert_eq!(config.window_width, 1200);
    }

    #[test]
    fn test_load_all_sections() {
        let mut config = CameraConfig::new();
        config
            .load_from_str(
                "[camera]\nviewport_width = 320\nviewport_height = 180\n\
                 [window]\nwidth = 1280\nheight = 720\ntarget_fps = 144\n\
                 [rooms]\nlayout = levels/one.json\n",
            )
            .unwrap();
        assert_eq!(config.viewport_width, 320.0);
        assert_eq!(config.viewport_height, 180.0);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.target_fps, 144);
        assert_eq!(config.layout_path, PathBuf::from("levels/one.json"));
    }

    #[test]
    fn test_invalid_axes_is_an_error() {
        let mut config = CameraConfig::new();
        let err = config
            .load_from_str("[camera]\nfollow_axes = sideways\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Camera(CameraError::InvalidAxesMode(_))
        ));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let mut config = CameraConfig::new();
        let err = config
            .load_from_str("[window]\nwidth = wide\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::BadValue { key: "width", .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut config = CameraConfig::with_path("./definitely/not/here.ini");
        assert!(matches!(config.load_from_file(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("roomcam_config_{}.ini", std::process::id()));
        let mut saved = CameraConfig::with_path(&path);
        saved.pan_speed = 123.0;
        saved.follow_axes = FollowAxes::Vertical;
        saved.save_to_file().unwrap();

        let mut loaded = CameraConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.pan_speed, 123.0);
        assert_eq!(loaded.follow_axes, FollowAxes::Vertical);
        let _ = std::fs::remove_file(&path);
    }
}
