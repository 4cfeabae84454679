//! Stats command handler

use anyhow::{Context, Result};

use termclean::input::{read_input, InputSource};
use termclean::{clean, compute_stats, Config, TextStats};

/// Format stats as the human readable summary printed by the CLI.
pub fn format_stats(stats: &TextStats) -> String {
    format!(
        "Lines: {}\nCharacters: {}\nRemoved: {} ({:.1}%)",
        stats.line_count,
        stats.character_count,
        stats.characters_removed,
        stats.reduction_percent()
    )
}

/// Print stats for cleaning the given input.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&str>, paste: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let source = InputSource::from_args(file, paste);
    let original = read_input(&source, &config.input)
        .with_context(|| format!("Failed to read input from {}", source.describe()))?;

    let stats = compute_stats(&original, &clean(&original));
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_stats(&stats));
    }
    Ok(())
}
