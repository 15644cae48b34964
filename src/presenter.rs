//! All user-facing message text lives here. The line shell and the terminal UI
//! hand structured results (songs, titles, error kinds) to the [`Presenter`]
//! and only ever print what it returns, so wording changes stay in one place.

use crate::catalog::CatalogError;
use crate::models::Song;

/// Prompts used by the line shell. The shell appends `" --> "` itself.
pub const PROMPT_COMMAND: &str = "\nCommand";
pub const PROMPT_TITLE: &str = "Song name";
pub const PROMPT_ARTIST: &str = "Artist";
pub const PROMPT_GENRE: &str = "Genre";
pub const PROMPT_DELETE: &str = "\nEnter the name of the song to be deleted";
pub const PROMPT_SEARCH: &str = "\nEnter the name of the song to search for";

/// Formats every message the front-ends show.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    pub fn banner(&self) -> String {
        "Personal Music Library.\n\n".to_string()
    }

    pub fn command_help(&self) -> String {
        "Commands are I (insert), D (delete), S (search by song name),\nP (print), Q (quit).\n"
            .to_string()
    }

    pub fn prompt(&self, prompt: &str) -> String {
        format!("{prompt} --> ")
    }

    pub fn duplicate(&self, title: &str) -> String {
        format!(
            "\nA song with the name '{title}' is already in the music library.\nNo new song entered.\n"
        )
    }

    pub fn found(&self, title: &str) -> String {
        format!("\nThe song name '{title}' was found in the music library.\n")
    }

    pub fn not_found(&self, title: &str) -> String {
        format!("\nThe song name '{title}' was not found in the music library.\n")
    }

    pub fn deleted(&self, title: &str) -> String {
        format!("\nDeleting a song with name '{title}' from the music library.\n")
    }

    pub fn library_empty(&self) -> String {
        "\nThe music library is empty.\n".to_string()
    }

    pub fn library_title(&self) -> String {
        "\nMy Personal Music Library: \n".to_string()
    }

    pub fn invalid_command(&self) -> String {
        "\nInvalid command.\n".to_string()
    }

    pub fn input_too_long(&self, max_len: usize) -> String {
        format!("\nInput is longer than {max_len} characters.\n")
    }

    pub fn missing_title(&self) -> String {
        "\nA song name is required. No new song entered.\n".to_string()
    }

    pub fn insert_cancelled(&self) -> String {
        "Insert cancelled.".to_string()
    }

    pub fn added(&self, title: &str) -> String {
        format!("Added '{title}'.")
    }

    pub fn delete_cancelled(&self) -> String {
        "Deletion cancelled.".to_string()
    }

    pub fn clear_cancelled(&self) -> String {
        "Clear cancelled.".to_string()
    }

    pub fn cleared(&self, count: usize) -> String {
        match count {
            1 => "Removed 1 song from the music library.".to_string(),
            _ => format!("Removed {count} songs from the music library."),
        }
    }

    pub fn add_hint(&self) -> String {
        "Press 'i' to add a song.".to_string()
    }

    /// Blank line followed by title, artist and genre on their own lines.
    pub fn song(&self, song: &Song) -> String {
        format!("\n{}\n{}\n{}\n", song.title, song.artist, song.genre)
    }

    /// Whole-library listing, or the empty indication when there is nothing
    /// to list.
    pub fn library<'a>(&self, songs: impl IntoIterator<Item = &'a Song>) -> String {
        let mut songs = songs.into_iter().peekable();
        if songs.peek().is_none() {
            return self.library_empty();
        }
        let mut out = self.library_title();
        for song in songs {
            out.push_str(&self.song(song));
        }
        out
    }

    /// Message for a failed catalog operation.
    pub fn catalog_error(&self, err: &CatalogError) -> String {
        match err {
            CatalogError::DuplicateTitle(title) => self.duplicate(title),
            CatalogError::NotFound(title) => self.not_found(title),
        }
    }

    /// Single-line variant for status bars: message text with the leading and
    /// trailing newlines removed and inner line breaks joined by a space.
    pub fn one_line(&self, message: &str) -> String {
        message
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
