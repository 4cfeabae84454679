//! Command handlers for the termclean CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clean;
pub mod completions;
pub mod config;
pub mod rules;
pub mod stats;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};

/// Write `text` to `output` (a file path) or to stdout.
///
/// A trailing newline is added to non-empty text so the result is a proper
/// text file / terminal line.
pub fn write_output(text: &str, output: Option<&str>) -> Result<()> {
    let mut content = text.to_string();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
