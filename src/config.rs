use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::catalog::seed::{self, SeedTrack};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub tracks: Vec<SeedTrack>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            tracks: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }

    /// configured tracks, or the built-in dataset when none are configured
    pub fn seed_tracks(&self) -> Vec<SeedTrack> {
        if self.tracks.is_empty() {
            seed::default_tracks()
        } else {
            self.tracks.clone()
        }
    }
}
