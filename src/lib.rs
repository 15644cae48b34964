//! Core library surface for the personal music library.
//!
//! The [`Catalog`] is the heart of the crate: an ordered, duplicate-free set of
//! songs keyed by title. The line shell and the terminal UI are thin front-ends
//! over it, and both take their message text from the [`Presenter`].
pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod shell;
pub mod ui;

pub use catalog::{Catalog, CatalogError};
pub use config::CliConfig;
pub use models::Song;
pub use presenter::Presenter;
pub use shell::{Command, Shell};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
