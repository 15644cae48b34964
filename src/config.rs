//! Command-line configuration.

use clap::Parser;

/// Longest accepted field, in characters, unless overridden.
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "music-library")]
#[command(about = "A personal music library kept sorted by song title")]
pub struct CliConfig {
    /// Use the line-oriented command shell instead of the full-screen UI.
    #[arg(long)]
    pub plain: bool,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Maximum number of characters accepted for a title, artist or genre.
    #[arg(long, default_value_t = DEFAULT_MAX_FIELD_LENGTH, value_parser = parse_field_length)]
    pub max_field_length: usize,
}

fn parse_field_length(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    if value == 0 {
        return Err("the field length must be at least 1".to_string());
    }
    Ok(value)
}
