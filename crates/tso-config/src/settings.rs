//! Startup settings, read once from a flat TOML file.
//!
//! Every key is optional. A missing file yields [`Settings::default`]; a file
//! that exists but does not parse is reported so the caller can decide.

use crate::constants::*;
use crate::modes::RenderMode;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub client_size: [u32; 2],
    pub windowed: bool,
    pub fovy: f32,
    pub screen_color: [u8; 3],
    pub hoho_alpha: f32,
    pub depth_map_format: String,
    pub normal_map_format: String,
    pub render_mode: String,
    pub record_step: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_size: DEFAULT_CLIENT_SIZE,
            windowed: true,
            fovy: DEFAULT_FOVY_DEGREE,
            screen_color: DEFAULT_SCREEN_COLOR,
            hoho_alpha: DEFAULT_HOHO_ALPHA,
            depth_map_format: DEFAULT_DEPTH_MAP_FORMAT.to_owned(),
            normal_map_format: DEFAULT_NORMAL_MAP_FORMAT.to_owned(),
            render_mode: RenderMode::default().name().to_owned(),
            record_step: DEFAULT_RECORD_STEP,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let settings = Self::from_toml(&text)?;
                log::info!("[settings] loaded {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("[settings] {} not found; using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Initial render mode. Unknown names fall back to the default mode.
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_name(&self.render_mode).unwrap_or_else(|| {
            log::warn!(
                "[settings] unknown render mode {:?}; using {}",
                self.render_mode,
                RenderMode::default()
            );
            RenderMode::default()
        })
    }

    /// Frames between captures while recording; never zero.
    pub fn record_step(&self) -> u32 {
        self.record_step.max(1)
    }

    /// Screen color as RGBA components in 0..=1.
    pub fn screen_color_rgba(&self) -> [f64; 4] {
        let [r, g, b] = self.screen_color;
        [
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            1.0,
        ]
    }
}
