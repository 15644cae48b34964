//! Full-screen terminal front-end built on ratatui and crossterm.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
