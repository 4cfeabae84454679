//! termclean library
//!
//! Normalizes noisy, copy-pasted terminal output (box drawing, ANSI color
//! codes, shell prompts, stray pipes, ragged whitespace, escaped JSON arrays)
//! into clean plain text.
//!
//! The core is a fixed, ordered catalog of pure text rules ([`rules`]) driven
//! by the [`pipeline`], plus simple [`stats`] over the result. The remaining
//! modules support the command line shell.

pub mod clipboard;
pub mod config;
pub mod input;
pub mod pipeline;
pub mod rules;
pub mod stats;

pub use config::Config;
pub use pipeline::{clean, clean_optional, Pipeline, PipelineTrace, RuleStep};
pub use rules::{rules, CleaningRule};
pub use stats::{compute_stats, TextStats};
