//! Embedded JSON array cleanup.
//!
//! Copy-pasted logs and CSV exports often carry JSON arrays that were
//! serialized a second time: wrapped in quotes, with inner quotes escaped as
//! `\"` or doubled as `""`. This rule finds lines that look like such an array
//! (optionally behind a `label:` prefix), un-escapes them and pretty-prints the
//! result.
//!
//! Matching is heuristic. A line that looks like an array but does not parse
//! takes a cosmetic fallback instead of failing.
//!
//! The only prefix recognised before the array is a label: an identifier,
//! optionally quoted, followed by `:` or `=`. Any other prefix, such as a CSV
//! column (`row,"[""x""]"`) or prose (`see [1]`), makes the line a non-match
//! and it is left untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use super::map_lines;

/// `[label:|label=] ["|'][ ... ]["|']` spanning a whole line.
static JSON_ARRAY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[ \t]*(?:["']?(?P<label>[A-Za-z_][\w.\-]*)["']?[ \t]*[:=][ \t]*)?["']?(?P<array>\[.*\])["']?[ \t]*$"#,
    )
    .expect("valid regex")
});

static QUOTE_BEFORE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']+\["#).expect("valid regex"));

static QUOTE_AFTER_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\]["']+"#).expect("valid regex"));

/// Outcome of cleaning one JSON-array-looking line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonArrayCleanup {
    /// The array parsed; `pretty` is its 2-space indented form.
    Parsed {
        label: Option<String>,
        pretty: String,
    },
    /// The array did not parse; the line after cosmetic quote cleanup.
    Fallback(String),
}

impl JsonArrayCleanup {
    /// Render the replacement text for the matched line.
    pub fn into_text(self) -> String {
        match self {
            Self::Parsed {
                label: Some(label),
                pretty,
            } => format!("{}: {}", label, pretty),
            Self::Parsed { label: None, pretty } => pretty,
            Self::Fallback(text) => text,
        }
    }
}

/// Clean every line of `text` that looks like an embedded JSON array.
pub fn clean_json_arrays(text: &str) -> String {
    if !text.contains('[') {
        return text.to_string();
    }
    map_lines(text, |line| match cleanup_json_candidate(line) {
        Some(cleanup) => cleanup.into_text(),
        None => line.to_string(),
    })
}

/// Inspect a single line. Returns `None` when the line does not look like a
/// JSON array at all.
pub fn cleanup_json_candidate(line: &str) -> Option<JsonArrayCleanup> {
    let caps = JSON_ARRAY_LINE.captures(line)?;
    let array = caps.name("array")?.as_str();
    let label = caps.name("label").map(|m| m.as_str().to_string());

    let parsed = parse_array(array).or_else(|| parse_array(&unescape_quotes(array)));
    let pretty = parsed.and_then(|value| serde_json::to_string_pretty(&value).ok());

    Some(match pretty {
        Some(pretty) => JsonArrayCleanup::Parsed { label, pretty },
        None => {
            trace!(line_len = line.len(), "JSON array candidate did not parse, using fallback");
            JsonArrayCleanup::Fallback(cosmetic_cleanup(line))
        }
    })
}

fn parse_array(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Array(_)) => Some(value),
        _ => None,
    }
}

/// Undo one level of quote escaping, both `\"` and CSV-style `""`.
fn unescape_quotes(text: &str) -> String {
    text.replace("\\\"", "\"").replace("\"\"", "\"")
}

fn cosmetic_cleanup(line: &str) -> String {
    let text = unescape_quotes(line);
    let text = QUOTE_BEFORE_OPEN.replace_all(&text, "[");
    QUOTE_AFTER_CLOSE.replace_all(&text, "]").into_owned()
}
