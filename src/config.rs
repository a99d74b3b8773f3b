use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::fade::DEFAULT_FADE_DURATION;
use crate::scene::Lighting;

/// Viewer settings. Every field is optional in the JSON file; missing
/// fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub asset_root: PathBuf,
    pub model: String,
    pub model_scale: f32,
    pub fade_duration: f32,
    /// Linear RGB behind the model
    pub background: [f32; 3],
    pub lighting: Lighting,
    pub heading: String,
    pub subtitle: String,
    pub show_ui: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Monkey Viewer".to_string(),
            window_width: 1280,
            window_height: 720,
            asset_root: PathBuf::from("public"),
            model: "monkey.glb".to_string(),
            model_scale: 2.5,
            fade_duration: DEFAULT_FADE_DURATION,
            background: [1.0, 1.0, 1.0],
            lighting: Lighting::default(),
            heading: "Hello, world!".to_string(),
            subtitle: "Drag to orbit, right-drag to pan, scroll to zoom".to_string(),
            show_ui: true,
        }
    }
}

impl ViewerConfig {
    /// Reject values the renderer cannot draw. A zero scale has no normal
    /// matrix and a negative one turns the mesh inside out under back-face
    /// culling.
    pub fn validate(&self) -> Result<()> {
        if !self.model_scale.is_finite() || self.model_scale <= 0.0 {
            bail!(
                "model_scale must be a positive number, got {}",
                self.model_scale
            );
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid viewer configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&json).with_context(|| format!("In {:?}", path))?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
