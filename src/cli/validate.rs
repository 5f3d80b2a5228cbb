//! Input rules applied before calling into the catalog

use thiserror::Error;

use crate::{
    catalog::{TrackCatalog, seed::MAX_RATING},
    domain::track::TrackKey,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Track number cannot be empty")]
    EmptyTrackNumber,

    #[error("Track number must contain only digits")]
    NonDigitTrackNumber,

    #[error("Track {0} not found in library")]
    UnknownTrack(TrackKey),

    #[error("Rating cannot be empty")]
    EmptyRating,

    #[error("Rating must be a number")]
    NonNumericRating,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

fn is_all_digits(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit())
}

/// checks the track number is well formed and present in the catalog
pub fn validate_track_number(input: &str, catalog: &TrackCatalog) -> Result<TrackKey, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyTrackNumber);
    }
    if !is_all_digits(input) {
        return Err(InputError::NonDigitTrackNumber);
    }
    if !catalog.contains(input) {
        return Err(InputError::UnknownTrack(TrackKey::from(input)));
    }
    Ok(TrackKey::from(input))
}

pub fn validate_rating(input: &str) -> Result<u8, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyRating);
    }
    if !is_all_digits(input) {
        return Err(InputError::NonNumericRating);
    }
    // long digit runs overflow u8, they are out of range anyway
    match input.parse::<u8>() {
        Ok(rating) if (1..=MAX_RATING).contains(&rating) => Ok(rating),
        _ => Err(InputError::RatingOutOfRange),
    }
}
