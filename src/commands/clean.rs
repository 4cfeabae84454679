//! Clean command handler

use anyhow::{Context, Result};
use serde::Serialize;

use termclean::clipboard;
use termclean::input::{read_input, InputSource};
use termclean::{compute_stats, Config, Pipeline, PipelineTrace, TextStats};

use super::stats::format_stats;
use super::write_output;
use crate::cli::CleanArgs;

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
pub struct CleanReport<'a> {
    pub cleaned: &'a str,
    pub stats: TextStats,
}

/// Render the per-rule trace printed by `--steps`.
pub fn format_steps(trace: &PipelineTrace) -> String {
    let width = trace.steps().iter().map(|s| s.rule.len()).max().unwrap_or(0);
    trace
        .steps()
        .iter()
        .map(|step| {
            let delta = step.chars_before as i64 - step.chars_after as i64;
            let status = if step.changed {
                format!("changed ({:+} chars)", -delta)
            } else {
                "unchanged".to_string()
            };
            format!("{:<width$}  {}", step.rule, status, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Clean text from a file, stdin, or the clipboard.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &CleanArgs) -> Result<()> {
    let config = Config::load()?;
    let source = InputSource::from_args(args.file.as_deref(), args.paste);

    if source == InputSource::Stdin && atty::is(atty::Stream::Stdin) {
        eprintln!("Reading from stdin (press Ctrl+D when done)...");
    }

    let original = read_input(&source, &config.input)
        .with_context(|| format!("Failed to read input from {}", source.describe()))?;

    let pipeline = Pipeline::standard();
    let cleaned = if args.steps {
        let trace = pipeline.run_traced(&original);
        eprintln!("{}", format_steps(&trace));
        trace.into_output()
    } else {
        pipeline.run(&original)
    };
    let stats = compute_stats(&original, &cleaned);

    if args.json {
        let report = CleanReport {
            cleaned: &cleaned,
            stats,
        };
        write_output(&serde_json::to_string_pretty(&report)?, args.output.as_deref())?;
    } else {
        write_output(&cleaned, args.output.as_deref())?;
    }

    if args.stats || config.output.stats {
        eprintln!("{}", format_stats(&stats));
    }

    if args.copy || config.output.copy {
        let tool = clipboard::copy_text(&cleaned)?;
        eprintln!("Copied cleaned text to clipboard ({})", tool.name());
    }

    Ok(())
}
