//! Binary entry point. Parses the command line, sets up logging, and hands an
//! empty catalog to either the line shell or the terminal UI.
use std::io;

use clap::Parser;
use music_library::logging::init_logger;
use music_library::{run_app, App, Catalog, CliConfig, Shell};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logger(config.verbose);
    tracing::debug!(?config, "parsed configuration");

    if config.plain {
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout(), config.max_field_length);
        return shell.run();
    }

    let mut app = App::new(Catalog::new(), config.max_field_length);
    run_app(&mut app)
}
