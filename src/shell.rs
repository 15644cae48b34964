//! Line-oriented command shell. Reads single-letter commands and their fields
//! from any `BufRead`, drives the [`Catalog`], and writes whatever the
//! [`Presenter`] renders to any `Write`. Tests run it against in-memory
//! buffers; `main` wires it to stdin/stdout when `--plain` is given.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::presenter::{
    Presenter, PROMPT_ARTIST, PROMPT_COMMAND, PROMPT_DELETE, PROMPT_GENRE, PROMPT_SEARCH,
    PROMPT_TITLE,
};

/// Commands understood by the shell. Only the first character of the command
/// line matters and it is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert,
    Delete,
    Search,
    Print,
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.chars().next().map(|ch| ch.to_ascii_uppercase()) {
            Some('I') => Command::Insert,
            Some('D') => Command::Delete,
            Some('S') => Command::Search,
            Some('P') => Command::Print,
            Some('Q') => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

/// Outcome of reading one field line.
enum Field {
    Value(String),
    TooLong,
    Closed,
}

/// Whether the command loop keeps going.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    presenter: Presenter,
    max_field_length: usize,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, max_field_length: usize) -> Self {
        Self {
            input,
            output,
            catalog: Catalog::new(),
            presenter: Presenter,
            max_field_length,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Hand back the output sink, consuming the shell.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the command loop until `Q` or end of input, then tear the catalog
    /// down and print it once more to show that it is empty.
    pub fn run(&mut self) -> Result<()> {
        info!("starting line shell");
        let banner = self.presenter.banner() + &self.presenter.command_help();
        self.emit(&banner)?;

        loop {
            let line = match self.read_line(PROMPT_COMMAND)? {
                Some(line) => line,
                None => break,
            };
            let command = Command::parse(&line);
            debug!(?command, "dispatching command");
            let flow = match command {
                Command::Insert => self.insert()?,
                Command::Delete => self.delete()?,
                Command::Search => self.search()?,
                Command::Print => self.print()?,
                Command::Quit => Flow::Quit,
                Command::Invalid => {
                    let message = self.presenter.invalid_command();
                    self.emit(&message)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.teardown()?;
        info!("line shell finished");
        Ok(())
    }

    fn insert(&mut self) -> Result<Flow> {
        let title = match self.read_field(PROMPT_TITLE)? {
            Field::Value(value) => value,
            Field::TooLong => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        let artist = match self.read_field(PROMPT_ARTIST)? {
            Field::Value(value) => value,
            Field::TooLong => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        let genre = match self.read_field(PROMPT_GENRE)? {
            Field::Value(value) => value,
            Field::TooLong => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };

        if title.is_empty() {
            let message = self.presenter.missing_title();
            self.emit(&message)?;
            return Ok(Flow::Continue);
        }

        if self.catalog.contains(&title) {
            let message = self.presenter.duplicate(&title);
            self.emit(&message)?;
            return Ok(Flow::Continue);
        }

        if let Err(err) = self.catalog.insert(title, artist, genre) {
            let message = self.presenter.catalog_error(&err);
            self.emit(&message)?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let title = match self.read_field(PROMPT_DELETE)? {
            Field::Value(value) => value,
            Field::TooLong => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        let message = match self.catalog.delete(&title) {
            Ok(song) => self.presenter.deleted(&song.title),
            Err(err) => self.presenter.catalog_error(&err),
        };
        self.emit(&message)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let title = match self.read_field(PROMPT_SEARCH)? {
            Field::Value(value) => value,
            Field::TooLong => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        let message = match self.catalog.search(&title) {
            Ok(song) => self.presenter.found(&title) + &self.presenter.song(song),
            Err(err) => self.presenter.catalog_error(&err),
        };
        self.emit(&message)?;
        Ok(Flow::Continue)
    }

    fn print(&mut self) -> Result<Flow> {
        let listing = self.presenter.library(&self.catalog);
        self.emit(&listing)?;
        Ok(Flow::Continue)
    }

    fn teardown(&mut self) -> Result<()> {
        let mut out = String::new();
        for song in self.catalog.clear() {
            out.push_str(&self.presenter.deleted(&song.title));
        }
        out.push_str(&self.presenter.library(&self.catalog));
        self.emit(&out)
    }

    /// Prompt for a field and enforce the length limit.
    fn read_field(&mut self, prompt: &str) -> Result<Field> {
        let value = match self.read_line(prompt)? {
            Some(value) => value,
            None => return Ok(Field::Closed),
        };
        if value.chars().count() > self.max_field_length {
            debug!(len = value.chars().count(), "rejected overlong input");
            let message = self.presenter.input_too_long(self.max_field_length);
            self.emit(&message)?;
            return Ok(Field::TooLong);
        }
        Ok(Field::Value(value))
    }

    /// Print a prompt and read one line without its line terminator.
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let prompt = self.presenter.prompt(prompt);
        self.emit(&prompt)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Bytes that are not UTF-8 become U+FFFD instead of ending the session.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("failed to write to output")?;
        self.output.flush().context("failed to flush output")
    }
}
