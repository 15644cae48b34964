//! The song catalog: an ordered, duplicate-free collection keyed by title.
//!
//! Songs live in a `Vec` kept sorted by title using plain byte-wise `str`
//! ordering. Membership in the vector is ownership, so removing a song from
//! the catalog drops it and nothing else can keep a dangling handle around.
//! Every operation either applies fully or leaves the catalog untouched.

use std::slice;

use thiserror::Error;
use tracing::debug;

use crate::models::Song;

/// Expected, recoverable failures of catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("a song with the name '{0}' is already in the music library")]
    DuplicateTitle(String),

    #[error("the song name '{0}' was not found in the music library")]
    NotFound(String),
}

/// In-memory ordered collection of songs.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether a song with exactly this title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_ok()
    }

    /// Insert a new song at the position that keeps titles ascending.
    ///
    /// The new song goes right before the first existing song whose title is
    /// greater or equal. A title that is already present is rejected and the
    /// existing song stays as it was.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<&Song, CatalogError> {
        let song = Song::new(title, artist, genre);
        let index = match self.position(&song.title) {
            Ok(_) => {
                debug!(title = %song.title, "rejected duplicate title");
                return Err(CatalogError::DuplicateTitle(song.title));
            }
            Err(index) => index,
        };
        debug!(%song, index, "inserting song");
        self.songs.insert(index, song);
        Ok(&self.songs[index])
    }

    /// Remove the song with this title, handing it back to the caller.
    pub fn delete(&mut self, title: &str) -> Result<Song, CatalogError> {
        match self.position(title) {
            Ok(index) => {
                let song = self.songs.remove(index);
                debug!(%song, index, "deleted song");
                Ok(song)
            }
            Err(_) => {
                debug!(title, "delete of unknown title");
                Err(CatalogError::NotFound(title.to_string()))
            }
        }
    }

    /// Look up a song by its exact title.
    pub fn search(&self, title: &str) -> Result<&Song, CatalogError> {
        self.position(title)
            .map(|index| &self.songs[index])
            .map_err(|_| CatalogError::NotFound(title.to_string()))
    }

    /// Index of the song with this title inside the ordered listing.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.position(title).ok()
    }

    /// Song at a listing position.
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Traverse all songs in ascending title order. Every call starts a fresh
    /// traversal of the current contents.
    pub fn list(&self) -> slice::Iter<'_, Song> {
        self.songs.iter()
    }

    /// Remove every song, returning them in ascending title order.
    pub fn clear(&mut self) -> Vec<Song> {
        debug!(count = self.songs.len(), "clearing catalog");
        std::mem::take(&mut self.songs)
    }

    fn position(&self, title: &str) -> Result<usize, usize> {
        self.songs.binary_search_by(|song| song.title.as_str().cmp(title))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(catalog: &Catalog) -> Vec<&str> {
        catalog.list().map(|song| song.title.as_str()).collect()
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.list().next(), None);
    }

    #[test]
    fn insert_keeps_titles_ordered() {
        let mut catalog = Catalog::new();
        catalog.insert("Yesterday", "Beatles", "Rock").unwrap();
        catalog.insert("Imagine", "Lennon", "Rock").unwrap();
        catalog.insert("Let It Be", "Beatles", "Rock").unwrap();

        assert_eq!(titles(&catalog), ["Imagine", "Let It Be", "Yesterday"]);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn ordering_is_byte_wise() {
        let mut catalog = Catalog::new();
        for title in ["banana", "Apple", "apple", "Banana", "_x", "1999"] {
            catalog.insert(title, "", "").unwrap();
        }
        assert_eq!(
            titles(&catalog),
            ["1999", "Apple", "Banana", "_x", "apple", "banana"]
        );
    }

    #[test]
    fn duplicate_insert_leaves_existing_song() {
        let mut catalog = Catalog::new();
        catalog.insert("A", "X", "Y").unwrap();

        let err = catalog.insert("A", "Z", "W").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTitle("A".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search("A").unwrap().artist, "X");
    }

    #[test]
    fn insert_returns_the_stored_song() {
        let mut catalog = Catalog::new();
        let song = catalog.insert("Imagine", "Lennon", "Rock").unwrap();
        assert_eq!(song, &Song::new("Imagine", "Lennon", "Rock"));
    }

    #[test]
    fn contains_matches_exact_title_only() {
        let mut catalog = Catalog::new();
        catalog.insert("Hey Jude", "Beatles", "Rock").unwrap();
        assert!(catalog.contains("Hey Jude"));
        assert!(!catalog.contains("hey jude"));
        assert!(!catalog.contains("Hey Jude "));
    }

    #[test]
    fn delete_returns_removed_song() {
        let mut catalog = Catalog::new();
        catalog.insert("One", "U2", "Rock").unwrap();
        catalog.insert("Two", "?", "Pop").unwrap();

        let removed = catalog.delete("One").unwrap();
        assert_eq!(removed.title, "One");
        assert_eq!(titles(&catalog), ["Two"]);
    }

    #[test]
    fn delete_missing_title_fails() {
        let mut catalog = Catalog::new();
        let err = catalog.delete("Missing").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Missing".to_string()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn search_reports_not_found() {
        let mut catalog = Catalog::new();
        catalog.insert("Song", "Artist", "Genre").unwrap();
        assert!(matches!(
            catalog.search("Other"),
            Err(CatalogError::NotFound(title)) if title == "Other"
        ));
    }

    #[test]
    fn empty_title_is_accepted_by_the_catalog() {
        let mut catalog = Catalog::new();
        catalog.insert("", "Nobody", "Silence").unwrap();
        catalog.insert("A", "X", "Y").unwrap();
        assert_eq!(titles(&catalog), ["", "A"]);
    }

    #[test]
    fn clear_returns_songs_in_order_and_empties() {
        let mut catalog = Catalog::new();
        catalog.insert("b", "", "").unwrap();
        catalog.insert("a", "", "").unwrap();

        let removed: Vec<String> = catalog.clear().into_iter().map(|s| s.title).collect();
        assert_eq!(removed, ["a", "b"]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.list().count(), 0);
    }

    #[test]
    fn index_and_get_follow_listing_order() {
        let mut catalog = Catalog::new();
        catalog.insert("c", "", "").unwrap();
        catalog.insert("a", "", "").unwrap();
        catalog.insert("b", "", "").unwrap();

        assert_eq!(catalog.index_of("b"), Some(1));
        assert_eq!(catalog.index_of("z"), None);
        assert_eq!(catalog.get(2).map(|s| s.title.as_str()), Some("c"));
        assert_eq!(catalog.get(3), None);
    }
}
