//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the CLI acquires text before cleaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Inputs larger than this many bytes are rejected
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
    /// Convert CRLF and lone CR line endings to LF on read
    #[serde(default = "default_normalize_line_endings")]
    pub normalize_line_endings: bool,
}

pub fn default_max_bytes() -> usize {
    10 * 1024 * 1024
}

pub fn default_normalize_line_endings() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            normalize_line_endings: default_normalize_line_endings(),
        }
    }
}

/// What the CLI does with the cleaned text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print a stats summary to stderr after cleaning
    #[serde(default)]
    pub stats: bool,
    /// Also copy the cleaned text to the clipboard
    #[serde(default)]
    pub copy: bool,
}
