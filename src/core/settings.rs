//! Core domain: demo settings and their optional RON override file.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where the settings override lives, relative to the working directory.
pub const SETTINGS_PATH: &str = "assets/data/demo.ron";

/// Error type for a settings file that exists but cannot be used.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for SettingsLoadError {}

/// Window, sheet and player defaults for the demo.
///
/// Every field has a default, so a settings file only needs to name the
/// values it changes.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub resizable: bool,
    pub sheet_path: PathBuf,
    pub sheet_cols: usize,
    pub sheet_rows: usize,
    /// Player speed in units per second.
    pub speed: f32,
    /// Distance to cover before the walk cycle advances one frame.
    pub anim_interval: f32,
    /// Amount added or removed by one press of a tuning key.
    pub tuning_step: f32,
    pub clear_color: [f32; 3],
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            window_title: "Pixel Rocks!".to_string(),
            window_width: 1024,
            window_height: 768,
            resizable: true,
            sheet_path: PathBuf::from("assets/professor_walk.png"),
            sheet_cols: 9,
            sheet_rows: 4,
            speed: 76.0,
            anim_interval: 4.5,
            tuning_step: 0.5,
            // burlywood
            clear_color: [0.871, 0.722, 0.529],
        }
    }
}

/// Records whether the running settings came from disk.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SettingsOrigin {
    File(PathBuf),
    Defaults(PathBuf),
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl DemoSettings {
    /// Read settings from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<(Self, SettingsOrigin), SettingsLoadError> {
        let file_name = path.display().to_string();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok((Self::default(), SettingsOrigin::Defaults(path.to_path_buf())));
            }
            Err(e) => {
                return Err(SettingsLoadError {
                    file: file_name,
                    message: format!("IO error: {}", e),
                });
            }
        };

        let settings = Self::from_ron(&contents).map_err(|message| SettingsLoadError {
            file: file_name,
            message,
        })?;
        Ok((settings, SettingsOrigin::File(path.to_path_buf())))
    }

    /// Parse settings from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, String> {
        ron_options()
            .from_str(contents)
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub fn window_center(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32) / 2.0
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b] = self.clear_color;
        Color::srgb(r, g, b)
    }
}
