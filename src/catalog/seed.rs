//! Seed records the catalog is built from

use serde::Deserialize;

use crate::{
    catalog::error::CatalogError,
    domain::track::{LibraryItem, TrackKey},
};

pub const MAX_RATING: u8 = 5;

/// One track as written in the seed data or in the config file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedTrack {
    pub key: String,
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub play_count: u32,
}

impl SeedTrack {
    pub fn new(key: &str, name: &str, artist: &str, rating: u8) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            artist: artist.to_string(),
            rating,
            play_count: 0,
        }
    }

    /// checks the record and splits it into its key and library item
    pub fn into_entry(self) -> Result<(TrackKey, LibraryItem), CatalogError> {
        if self.key.is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if !self.key.chars().all(|c| c.is_ascii_digit()) {
            return Err(CatalogError::InvalidKey(self.key));
        }

        let key = TrackKey(self.key);
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(key));
        }
        if self.artist.trim().is_empty() {
            return Err(CatalogError::EmptyArtist(key));
        }
        if self.rating > MAX_RATING {
            return Err(CatalogError::InvalidRating {
                track: key,
                rating: self.rating,
            });
        }

        let mut item = LibraryItem::with_rating(self.name, self.artist, self.rating);
        item.play_count = self.play_count;
        Ok((key, item))
    }
}

/// Built-in dataset used when no tracks are configured
pub fn default_tracks() -> Vec<SeedTrack> {
    vec![
        SeedTrack::new("01", "Another Brick in the Wall", "Pink Floyd", 4),
        SeedTrack::new("02", "Stayin' Alive", "Bee Gees", 5),
        SeedTrack::new("03", "Highway to Hell", "AC/DC", 2),
        SeedTrack::new("04", "Shape of You", "Ed Sheeran", 1),
        SeedTrack::new("05", "Someone Like You", "Adele", 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_are_valid() {
        for seed in default_tracks() {
            let (key, item) = seed.into_entry().unwrap();
            assert!(!key.as_str().is_empty());
            assert!(!item.name.is_empty());
            assert!(!item.artist.is_empty());
            assert!(item.rating <= MAX_RATING);
            assert_eq!(item.play_count, 0);
        }
    }

    #[test]
    fn into_entry_keeps_initial_play_count() {
        let mut seed = SeedTrack::new("09", "Track", "Artist", 0);
        seed.play_count = 12;

        let (_, item) = seed.into_entry().unwrap();
        assert_eq!(item.play_count, 12);
    }

    #[test]
    fn into_entry_rejects_bad_records() {
        assert_eq!(
            SeedTrack::new("", "Track", "Artist", 1).into_entry(),
            Err(CatalogError::EmptyKey)
        );
        assert_eq!(
            SeedTrack::new("1a", "Track", "Artist", 1).into_entry(),
            Err(CatalogError::InvalidKey("1a".into()))
        );
        assert_eq!(
            SeedTrack::new("01", " ", "Artist", 1).into_entry(),
            Err(CatalogError::EmptyName("01".into()))
        );
        assert_eq!(
            SeedTrack::new("01", "Track", "", 1).into_entry(),
            Err(CatalogError::EmptyArtist("01".into()))
        );
        assert_eq!(
            SeedTrack::new("01", "Track", "Artist", 6).into_entry(),
            Err(CatalogError::InvalidRating {
                track: "01".into(),
                rating: 6
            })
        );
    }
}
