use thiserror::Error;

use crate::domain::track::TrackKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("track {0} appears more than once in the seed data")]
    DuplicateKey(TrackKey),

    #[error("seed track has an empty track number")]
    EmptyKey,

    #[error("track number '{0}' must contain only digits")]
    InvalidKey(String),

    #[error("track {0} has an empty name")]
    EmptyName(TrackKey),

    #[error("track {0} has an empty artist")]
    EmptyArtist(TrackKey),

    #[error("track {track} has rating {rating}, expected 0 to 5")]
    InvalidRating { track: TrackKey, rating: u8 },
}
