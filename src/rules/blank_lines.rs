//! Whole-text layout rules: blank-line collapsing and outer trimming.

use once_cell::sync::Lazy;
use regex::Regex;

/// Three or more newlines, possibly with whitespace between them.
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[^\S\n]*\n){2,}").expect("valid regex"));

/// Collapse any run of two or more blank lines into exactly one.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

/// Trim leading and trailing whitespace from the text as a whole.
pub fn trim_outer(text: &str) -> String {
    text.trim().to_string()
}
