use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError};
use crate::presenter::Presenter;

use super::forms::{ConfirmClear, FormError, SongField, SongForm, TitlePrompt};
use super::helpers::{centered_rect, song_line, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;

/// Fine-grained modes layered over the library list.
enum Mode {
    Normal,
    Inserting(SongForm),
    Deleting(TitlePrompt),
    Searching(TitlePrompt),
    ConfirmClear(ConfirmClear),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state for the terminal UI.
pub struct App {
    catalog: Catalog,
    presenter: Presenter,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
    max_field_length: usize,
}

impl App {
    pub fn new(catalog: Catalog, max_field_length: usize) -> Self {
        Self {
            catalog,
            presenter: Presenter,
            selected: 0,
            mode: Mode::Normal,
            status: None,
            max_field_length,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process one key press. Returns `true` once the user asked to quit, at
    /// which point the catalog has already been cleared.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Inserting(form) => self.handle_insert(code, form)?,
            Mode::Deleting(prompt) => self.handle_delete(code, prompt)?,
            Mode::Searching(prompt) => self.handle_search(code, prompt)?,
            Mode::ConfirmClear(confirm) => self.handle_confirm_clear(code, confirm)?,
        };

        self.mode = mode;
        if exit {
            let released = self.catalog.clear();
            info!(count = released.len(), "released catalog on exit");
        }
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.catalog.len().saturating_sub(1),
            KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::Inserting(SongForm::new(self.max_field_length)));
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('-') => {
                self.clear_status();
                let prompt = match self.catalog.get(self.selected) {
                    Some(song) => TitlePrompt::prefilled(&song.title, self.max_field_length),
                    None => TitlePrompt::new(self.max_field_length),
                };
                return Ok(Mode::Deleting(prompt));
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('/') => {
                self.clear_status();
                return Ok(Mode::Searching(TitlePrompt::new(self.max_field_length)));
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                if self.catalog.is_empty() {
                    let message = self.presenter.library_empty();
                    self.set_status(self.presenter.one_line(&message), StatusKind::Info);
                } else {
                    self.clear_status();
                    return Ok(Mode::ConfirmClear(ConfirmClear {
                        count: self.catalog.len(),
                    }));
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_insert(&mut self, code: KeyCode, mut form: SongForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status(self.presenter.insert_cancelled(), StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_song(&form) {
                Ok(title) => {
                    self.set_status(self.presenter.added(&title), StatusKind::Info);
                    keep_open = false;
                }
                Err(err) => {
                    let message = if let Some(err) = err.downcast_ref::<CatalogError>() {
                        self.presenter.one_line(&self.presenter.catalog_error(err))
                    } else if let Some(FormError::MissingTitle) = err.downcast_ref::<FormError>() {
                        self.presenter.one_line(&self.presenter.missing_title())
                    } else {
                        surface_error(&err)
                    };
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::Inserting(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_delete(&mut self, code: KeyCode, mut prompt: TitlePrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status(self.presenter.delete_cancelled(), StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
            }
            KeyCode::Enter => {
                let Some(title) = prompt.title().map(str::to_string) else {
                    return Ok(Mode::Deleting(prompt));
                };
                match self.catalog.delete(&title) {
                    Ok(song) => {
                        let message = self.presenter.deleted(&song.title);
                        self.set_status(self.presenter.one_line(&message), StatusKind::Info);
                        self.ensure_in_bounds();
                    }
                    Err(err) => {
                        let message = self.presenter.catalog_error(&err);
                        self.set_status(self.presenter.one_line(&message), StatusKind::Error);
                    }
                }
                return Ok(Mode::Normal);
            }
            _ => {}
        }
        Ok(Mode::Deleting(prompt))
    }

    fn handle_search(&mut self, code: KeyCode, mut prompt: TitlePrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
            }
            KeyCode::Enter => {
                let Some(title) = prompt.title().map(str::to_string) else {
                    return Ok(Mode::Searching(prompt));
                };
                let message = match self.catalog.search(&title) {
                    Ok(_) => {
                        self.select_title(&title);
                        (self.presenter.found(&title), StatusKind::Info)
                    }
                    Err(err) => (self.presenter.catalog_error(&err), StatusKind::Error),
                };
                self.set_status(self.presenter.one_line(&message.0), message.1);
                return Ok(Mode::Normal);
            }
            _ => {}
        }
        Ok(Mode::Searching(prompt))
    }

    fn handle_confirm_clear(&mut self, code: KeyCode, confirm: ConfirmClear) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status(self.presenter.clear_cancelled(), StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                let released = self.catalog.clear();
                info!(count = released.len(), "cleared catalog");
                self.selected = 0;
                self.set_status(self.presenter.cleared(released.len()), StatusKind::Info);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmClear(confirm)),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_library(frame, content_area);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Inserting(form) => self.draw_song_form(frame, area, form),
            Mode::Deleting(prompt) => self.draw_title_prompt(frame, area, "Delete Song", prompt),
            Mode::Searching(prompt) => self.draw_title_prompt(frame, area, "Search", prompt),
            Mode::ConfirmClear(confirm) => self.draw_confirm_clear(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("My Personal Music Library ({})", self.catalog.len()));

        if self.catalog.is_empty() {
            let text = self.presenter.one_line(&self.presenter.library_empty());
            let message = Paragraph::new(vec![
                Line::from(text),
                Line::from(self.presenter.add_hint()),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = self
            .catalog
            .list()
            .map(|song| ListItem::new(song_line(song)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let pairs: &[(&str, &str)] = match &self.mode {
            Mode::Inserting(_) => &[
                ("[Tab]", " Next Field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::Deleting(_) | Mode::Searching(_) => {
                &[("[Enter]", " Confirm   "), ("[Esc]", " Cancel")]
            }
            Mode::ConfirmClear(_) => &[("[Y]", " Clear   "), ("[N]", " Keep")],
            Mode::Normal => &[
                ("[↑↓]", " Navigate   "),
                ("[i]", " Insert   "),
                ("[d]", " Delete   "),
                ("[s]", " Search   "),
                ("[x]", " Clear   "),
                ("[q]", " Quit"),
            ],
        };

        let spans: Vec<Span<'static>> = pairs
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect();
        Line::from(spans)
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, form: &SongForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Insert Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Title", SongField::Title),
            form.build_line("Artist", SongField::Artist),
            form.build_line("Genre", SongField::Genre),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            SongField::Title => ("Title: ", 0),
            SongField::Artist => ("Artist: ", 1),
            SongField::Genre => ("Genre: ", 2),
        };
        let cursor_x = inner.x + prefix.len() as u16 + form.value_len(form.active) as u16;
        frame.set_cursor_position((cursor_x, inner.y + row));
    }

    fn draw_title_prompt(&self, frame: &mut Frame, area: Rect, title: &str, prompt: &TitlePrompt) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title(title.to_string());
        let paragraph = Paragraph::new(Span::raw(format!("Song name: {}", prompt.value)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Song name: ".len() as u16 + prompt.value.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_confirm_clear(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmClear) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Clear Library").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Remove all {} songs?", confirm.count)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn save_new_song(&mut self, form: &SongForm) -> Result<String> {
        let (title, artist, genre) = form.parse_inputs()?;
        let song = self.catalog.insert(title, artist, genre)?;
        let title = song.title.clone();
        self.select_title(&title);
        Ok(title)
    }

    fn select_title(&mut self, title: &str) {
        if let Some(index) = self.catalog.index_of(title) {
            debug!(title, index, "selecting song");
            self.selected = index;
        }
    }

    fn move_selection(&mut self, offset: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len() as isize;
        self.selected = (self.selected as isize + offset).clamp(0, len - 1) as usize;
    }

    fn ensure_in_bounds(&mut self) {
        if self.catalog.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.catalog.len() {
            self.selected = self.catalog.len() - 1;
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> Option<(&str, StatusKind)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.kind))
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> usize {
        self.selected
    }
}
