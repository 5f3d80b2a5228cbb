use std::{borrow::Borrow, fmt::Display};

use serde::Serialize;

/// Track number, the key a track is stored under in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TrackKey(pub String);

impl TrackKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TrackKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for TrackKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Represent a music track in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryItem {
    pub name: String,
    pub artist: String,
    /// 0 means unrated
    pub rating: u8,
    pub play_count: u32,
}

impl LibraryItem {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::with_rating(name, artist, 0)
    }

    pub fn with_rating(name: impl Into<String>, artist: impl Into<String>, rating: u8) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            rating,
            play_count: 0,
        }
    }

    /// rating rendered as a run of `*`, one per point
    pub fn stars(&self) -> String {
        "*".repeat(self.rating as usize)
    }

    /// `"{name} - {artist} {stars}"`, without the trailing space for unrated tracks
    pub fn info(&self) -> String {
        let stars = self.stars();
        if stars.is_empty() {
            format!("{} - {}", self.name, self.artist)
        } else {
            format!("{} - {} {}", self.name, self.artist, stars)
        }
    }
}
