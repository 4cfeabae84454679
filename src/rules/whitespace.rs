//! Per-line whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use super::map_lines;

static HORIZONTAL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Collapse every run of spaces/tabs to one space and trim each line.
///
/// Newlines are never touched; blank-line handling belongs to
/// [`super::collapse_blank_lines`].
pub fn normalize_whitespace(text: &str) -> String {
    map_lines(text, |line| {
        HORIZONTAL_RUN.replace_all(line, " ").trim().to_string()
    })
}
