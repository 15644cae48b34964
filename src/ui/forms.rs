use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;

/// Reasons a filled-in form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum FormError {
    #[error("song title is missing")]
    MissingTitle,
}

/// Form state for inserting a song.
#[derive(Clone)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) genre: String,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
    max_len: usize,
}

/// Enumerates the fields within the song form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum SongField {
    Title,
    Artist,
    Genre,
}

impl SongForm {
    pub(crate) fn new(max_len: usize) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            genre: String::new(),
            active: SongField::Title,
            error: None,
            max_len,
        }
    }

    /// Cycle focus forward across the three song fields.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            SongField::Title => SongField::Artist,
            SongField::Artist => SongField::Genre,
            SongField::Genre => SongField::Title,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            SongField::Title => SongField::Genre,
            SongField::Artist => SongField::Title,
            SongField::Genre => SongField::Artist,
        };
    }

    /// Insert a character into the active field. Control characters and
    /// anything past the length limit are refused.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() || self.value_len(self.active) >= self.max_len {
            return false;
        }
        self.field_mut(self.active).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.field_mut(self.active).pop();
    }

    /// Validate and normalize form inputs before they reach the catalog.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String), FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        Ok((
            title.to_string(),
            self.artist.trim().to_string(),
            self.genre.trim().to_string(),
        ))
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        let value = self.field(field);
        let is_active = self.active == field;

        let placeholder = match field {
            SongField::Title => "<required>",
            SongField::Artist | SongField::Genre => "<optional>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: SongField) -> usize {
        self.field(field).chars().count()
    }

    fn field(&self, field: SongField) -> &str {
        match field {
            SongField::Title => &self.title,
            SongField::Artist => &self.artist,
            SongField::Genre => &self.genre,
        }
    }

    fn field_mut(&mut self, field: SongField) -> &mut String {
        match field {
            SongField::Title => &mut self.title,
            SongField::Artist => &mut self.artist,
            SongField::Genre => &mut self.genre,
        }
    }
}

/// Single-line title entry shared by the delete and search prompts.
#[derive(Clone)]
pub(crate) struct TitlePrompt {
    pub(crate) value: String,
    max_len: usize,
}

impl TitlePrompt {
    pub(crate) fn new(max_len: usize) -> Self {
        Self {
            value: String::new(),
            max_len,
        }
    }

    /// Start with a title already typed in, clipped to the length limit.
    pub(crate) fn prefilled(title: &str, max_len: usize) -> Self {
        Self {
            value: title.chars().take(max_len).collect(),
            max_len,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() || self.value.chars().count() >= self.max_len {
            return false;
        }
        self.value.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    /// The entered title, or `None` when only whitespace was typed.
    pub(crate) fn title(&self) -> Option<&str> {
        let title = self.value.trim();
        (!title.is_empty()).then_some(title)
    }
}

/// State for confirming that every song should be removed.
pub(crate) struct ConfirmClear {
    pub(crate) count: usize,
}
