use log::info;
use thiserror::Error;

use crate::{catalog::TrackCatalog, domain::track::TrackKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("Playlist is empty!")]
    Empty,
}

/// Ordered list of track numbers, may contain the same track several times
#[derive(Debug, Default)]
pub struct Playlist {
    keys: Vec<TrackKey>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: TrackKey) {
        self.keys.push(key);
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[TrackKey] {
        &self.keys
    }

    /// one `"{key} {name} - {artist}"` line per entry, skipping keys the catalog doesn't know
    pub fn render(&self, catalog: &TrackCatalog) -> String {
        self.keys
            .iter()
            .filter_map(|key| {
                let item = catalog.get(key.as_str())?;
                Some(format!("{} {} - {}", key, item.name, item.artist))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// plays every entry once, bumping its play count
    pub fn play(&self, catalog: &mut TrackCatalog) -> Result<(), PlaylistError> {
        if self.is_empty() {
            return Err(PlaylistError::Empty);
        }
        for key in &self.keys {
            catalog.increment_play_count(key.as_str());
        }
        info!("played {} tracks", self.keys.len());
        Ok(())
    }
}
