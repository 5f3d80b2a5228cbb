use std::collections::HashMap;

use log::debug;

use crate::{
    catalog::{error::CatalogError, seed::SeedTrack},
    domain::track::{LibraryItem, TrackKey},
};

/// Main structure that implements all catalog logic
///
/// Entries keep the order of the seed data they were built from,
/// listing and searching walk them in that order.
#[derive(Debug, Default)]
pub struct TrackCatalog {
    entries: Vec<(TrackKey, LibraryItem)>,
    index: HashMap<TrackKey, usize>,
}

impl TrackCatalog {
    /// builds the catalog from seed records, rejecting invalid or duplicate ones
    pub fn from_seed(seed: Vec<SeedTrack>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for record in seed {
            let (key, item) = record.into_entry()?;
            if catalog.index.contains_key(&key) {
                return Err(CatalogError::DuplicateKey(key));
            }
            catalog.index.insert(key.clone(), catalog.entries.len());
            catalog.entries.push((key, item));
        }
        Ok(catalog)
    }

    pub fn get(&self, key: &str) -> Option<&LibraryItem> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut LibraryItem> {
        let i = *self.index.get(key)?;
        Some(&mut self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&TrackKey, &LibraryItem)> {
        self.entries.iter().map(|(key, item)| (key, item))
    }

    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.get(key).map(|item| item.name.as_str())
    }

    pub fn get_artist(&self, key: &str) -> Option<&str> {
        self.get(key).map(|item| item.artist.as_str())
    }

    pub fn get_rating(&self, key: &str) -> Option<u8> {
        self.get(key).map(|item| item.rating)
    }

    pub fn get_play_count(&self, key: &str) -> Option<u32> {
        self.get(key).map(|item| item.play_count)
    }

    /// Overwrites the rating of a track.
    ///
    /// The rating is expected to be validated by the caller,
    /// unknown keys are ignored.
    pub fn set_rating(&mut self, key: &str, rating: u8) {
        match self.get_mut(key) {
            Some(item) => item.rating = rating,
            None => debug!("set_rating: track {key} not in catalog, ignoring"),
        }
    }

    /// records one play of the track, unknown keys are ignored
    pub fn increment_play_count(&mut self, key: &str) {
        match self.get_mut(key) {
            Some(item) => item.play_count = item.play_count.saturating_add(1),
            None => debug!("increment_play_count: track {key} not in catalog, ignoring"),
        }
    }

    /// human readable `"{name} - {artist} {stars}"` line for one track
    pub fn format_entry(&self, key: &str) -> Option<String> {
        self.get(key).map(LibraryItem::info)
    }

    /// one `"{key} {name} {artist}"` line per track
    pub fn list_all(&self) -> String {
        self.iter()
            .map(|(key, item)| format!("{} {} {}", key, item.name, item.artist))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Case-insensitive substring search over track number, name and artist.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<(&TrackKey, &LibraryItem)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|(key, item)| {
                key.as_str().to_lowercase().contains(&query)
                    || item.name.to_lowercase().contains(&query)
                    || item.artist.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{MAX_RATING, default_tracks};

    fn catalog() -> TrackCatalog {
        TrackCatalog::from_seed(default_tracks()).unwrap()
    }

    fn keys(found: &[(&TrackKey, &LibraryItem)]) -> Vec<String> {
        found.iter().map(|(key, _)| key.to_string()).collect()
    }

    #[test]
    fn getters_return_values_for_every_seed_key() {
        let catalog = catalog();
        assert_eq!(catalog.len(), default_tracks().len());

        for seed in default_tracks() {
            let key = seed.key.as_str();
            assert!(!catalog.get_name(key).unwrap().is_empty());
            assert!(!catalog.get_artist(key).unwrap().is_empty());
            assert!(catalog.get_rating(key).unwrap() <= MAX_RATING);
            assert_eq!(catalog.get_play_count(key), Some(0));
        }
    }

    #[test]
    fn getters_return_none_for_unknown_key() {
        let catalog = catalog();

        assert_eq!(catalog.get_name("nonexistent"), None);
        assert_eq!(catalog.get_artist("nonexistent"), None);
        assert_eq!(catalog.get_rating("nonexistent"), None);
        assert_eq!(catalog.get_play_count("nonexistent"), None);
        assert_eq!(catalog.format_entry("nonexistent"), None);
        assert!(!catalog.contains("nonexistent"));
    }

    #[test]
    fn increment_play_count_adds_exactly_n() {
        let mut catalog = catalog();
        catalog.increment_play_count("02");
        let before = catalog.get_play_count("02").unwrap();

        for _ in 0..7 {
            catalog.increment_play_count("02");
        }

        assert_eq!(catalog.get_play_count("02"), Some(before + 7));
        assert_eq!(catalog.get_play_count("01"), Some(0));
    }

    #[test]
    fn set_rating_overwrites() {
        let mut catalog = catalog();

        catalog.set_rating("03", 5);
        assert_eq!(catalog.get_rating("03"), Some(5));

        catalog.set_rating("03", 1);
        assert_eq!(catalog.get_rating("03"), Some(1));
    }

    #[test]
    fn mutators_ignore_unknown_key() {
        let mut catalog = catalog();
        let listing = catalog.list_all();

        catalog.set_rating("99", 3);
        catalog.increment_play_count("99");

        assert_eq!(catalog.list_all(), listing);
        assert!(!catalog.contains("99"));
    }

    #[test]
    fn format_entry_uses_info() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.format_entry("01").unwrap(),
            "Another Brick in the Wall - Pink Floyd ****"
        );

        catalog.set_rating("01", 0);
        assert_eq!(
            catalog.format_entry("01").unwrap(),
            "Another Brick in the Wall - Pink Floyd"
        );
    }

    #[test]
    fn list_all_has_one_line_per_entry_in_seed_order() {
        let catalog = catalog();
        let listing = catalog.list_all();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), catalog.len());
        assert_eq!(lines[0], "01 Another Brick in the Wall Pink Floyd");
        assert_eq!(lines[4], "05 Someone Like You Adele");

        for (line, (key, _)) in lines.iter().zip(catalog.iter()) {
            assert_eq!(line.split_whitespace().next(), Some(key.as_str()));
        }
    }

    #[test]
    fn list_all_of_empty_catalog_is_empty() {
        let catalog = TrackCatalog::from_seed(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.list_all(), "");
    }

    #[test]
    fn search_empty_query_returns_nothing() {
        let catalog = catalog();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog();

        assert_eq!(keys(&catalog.search("floyd")), vec!["01"]);
        assert_eq!(keys(&catalog.search("PINK")), vec!["01"]);
        assert_eq!(keys(&catalog.search("hell")), vec!["03"]);
        assert_eq!(keys(&catalog.search("04")), vec!["04"]);
        assert!(catalog.search("zeppelin").is_empty());
    }

    #[test]
    fn search_returns_matches_in_catalog_order() {
        let catalog = catalog();

        // "you" is in "Shape of You" and "Someone Like You"
        assert_eq!(keys(&catalog.search("you")), vec!["04", "05"]);
        // every key contains "0"
        assert_eq!(keys(&catalog.search("0")).len(), catalog.len());
    }

    #[test]
    fn from_seed_rejects_duplicate_keys() {
        let seed = vec![
            SeedTrack::new("01", "Track", "Artist", 1),
            SeedTrack::new("01", "Other", "Artist", 2),
        ];

        assert_eq!(
            TrackCatalog::from_seed(seed).unwrap_err(),
            CatalogError::DuplicateKey("01".into())
        );
    }
}
