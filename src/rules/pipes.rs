//! Stray pipe removal.
//!
//! Markdown-ish tables and some TUI frames use ASCII `|` as a border. Only the
//! outermost pipe on each edge of a line is removed, so shell pipelines such
//! as `ls | grep x` keep their inner pipes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::map_lines;

static LEADING_PIPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*\|[ \t]*").expect("valid regex"));

static TRAILING_PIPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*\|[ \t]*$").expect("valid regex"));

/// Strip one leading and one trailing `|` (with surrounding spaces) per line.
///
/// A line of three or more pipes keeps its middle pipe: `"|  |  |"` becomes
/// `"|"`.
pub fn remove_pipes(text: &str) -> String {
    if !text.contains('|') {
        return text.to_string();
    }
    map_lines(text, |line| {
        let line = LEADING_PIPE.replace(line, "");
        TRAILING_PIPE.replace(&line, "").into_owned()
    })
}
