// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "monkey-viewer")]
#[command(
    about = "Rotating glTF model viewer",
    long_about = "Rotating glTF model viewer.\n\n\
        The model is resolved against the asset root, which defaults to \
        `public/` in the working directory, so running without flags \
        expects `public/monkey.glb`. Use --assets and --model to point \
        elsewhere, e.g. `monkey-viewer --assets ./models --model suzanne.glb`."
)]
pub struct Cli {
    /// Model file, relative to the asset root
    #[arg(long)]
    pub model: Option<String>,

    /// Directory model paths are resolved against
    #[arg(long = "assets")]
    pub asset_root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Uniform model scale
    #[arg(long)]
    pub scale: Option<f32>,

    /// Fade-in duration in seconds
    #[arg(long = "fade")]
    pub fade_duration: Option<f32>,

    /// Disable the text overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Configuration from the optional file, with flags layered on top
    pub fn resolve_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::from_file(path)?,
            None => ViewerConfig::default(),
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Override config values with the flags that were given
    pub fn apply_to(&self, config: &mut ViewerConfig) {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(root) = &self.asset_root {
            config.asset_root = root.clone();
        }
        if let Some(scale) = self.scale {
            config.model_scale = scale;
        }
        if let Some(duration) = self.fade_duration {
            config.fade_duration = duration;
        }
        if self.no_ui {
            config.show_ui = false;
        }
    }
}
