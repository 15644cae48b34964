//! Domain model for a single catalog entry. Songs are plain data holders; the
//! catalog owns them and keeps them ordered, while the presenter and the
//! front-ends only ever look at them through shared references.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A song entry. The `title` doubles as the unique key inside the catalog and
/// is compared byte-wise, so "abba" and "ABBA" are two different songs.
pub struct Song {
    /// Unique key, also used for ordering.
    pub title: String,
    pub artist: String,
    pub genre: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Compose a `Title - Artist` string that omits the hyphen if the artist is
    /// blank. The list view in the terminal UI renders songs with it.
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
