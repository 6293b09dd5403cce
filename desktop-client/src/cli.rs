use std::path::PathBuf;

use clap::Parser;
use snake_common::config::Validate;

use crate::config::{get_config_manager, Config};

#[derive(Parser, Debug)]
#[command(name = "snake_desktop", about = "Classic Snake in a desktop window")]
pub struct Args {
    /// YAML config file. Nothing is read from disk without it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub field_width: Option<u32>,

    #[arg(long)]
    pub field_height: Option<u32>,

    /// Milliseconds between ticks.
    #[arg(long)]
    pub tick_ms: Option<u32>,

    #[arg(long)]
    pub title: Option<String>,

    /// Initial window size, e.g. 600x520.
    #[arg(long)]
    pub geometry: Option<String>,

    /// Seed for food placement.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub use_log_prefix: bool,
}

impl Args {
    /// Defaults, then the optional config file, then command line overrides.
    pub fn resolve_config(&self) -> Result<Config, String> {
        let mut config = match &self.config {
            Some(path) => get_config_manager(path).load()?,
            None => Config::default(),
        };
        self.apply_overrides(&mut config);
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.field_width {
            config.game.field_width = width;
        }
        if let Some(height) = self.field_height {
            config.game.field_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }
        if let Some(ref title) = self.title {
            config.window.title = title.clone();
        }
        if let Some(ref geometry) = self.geometry {
            config.window.geometry = geometry.clone();
        }
    }
}
