//! The cleaning rule catalog.
//!
//! Each rule is a pure, total `&str -> String` transformation. The catalog
//! order is fixed: later rules assume earlier ones have already run (e.g.
//! whitespace collapsing expects box framing and pipes to be gone).
//!
//! - [`remove_box_drawing`] - Drops box-only lines, strips frame edges
//! - [`clean_json_arrays`] - Un-escapes and pretty-prints embedded JSON arrays
//! - [`remove_pipes`] - Strips one leading and one trailing `|` per line
//! - [`normalize_whitespace`] - Collapses runs of spaces/tabs, trims lines
//! - [`remove_terminal_artifacts`] - Drops SGR codes, prompts, shell labels
//! - [`collapse_blank_lines`] - Limits blank-line runs to one
//! - [`trim_outer`] - Trims the text as a whole

mod blank_lines;
mod box_drawing;
mod json_array;
mod pipes;
mod terminal;
mod whitespace;

pub use blank_lines::{collapse_blank_lines, trim_outer};
pub use box_drawing::remove_box_drawing;
pub use json_array::{clean_json_arrays, cleanup_json_candidate, JsonArrayCleanup};
pub use pipes::remove_pipes;
pub use terminal::remove_terminal_artifacts;
pub use whitespace::normalize_whitespace;

use std::fmt;

/// A named, pure text transformation.
#[derive(Clone, Copy)]
pub struct CleaningRule {
    /// Unique, kebab-case identifier.
    pub name: &'static str,
    /// One-line human readable description.
    pub description: &'static str,
    transform: fn(&str) -> String,
}

impl CleaningRule {
    const fn new(
        name: &'static str,
        description: &'static str,
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            description,
            transform,
        }
    }

    /// Apply this rule to `input`.
    pub fn apply(&self, input: &str) -> String {
        (self.transform)(input)
    }
}

impl fmt::Debug for CleaningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningRule")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

static RULES: [CleaningRule; 7] = [
    CleaningRule::new(
        "remove-box-drawing",
        "Delete box-only lines and strip frame characters from line edges",
        remove_box_drawing,
    ),
    CleaningRule::new(
        "clean-json-arrays",
        "Un-escape quoted JSON arrays and pretty-print them",
        clean_json_arrays,
    ),
    CleaningRule::new(
        "remove-pipes",
        "Strip a leading and a trailing pipe from each line",
        remove_pipes,
    ),
    CleaningRule::new(
        "normalize-whitespace",
        "Collapse runs of spaces and tabs, trim each line",
        normalize_whitespace,
    ),
    CleaningRule::new(
        "remove-terminal-artifacts",
        "Remove ANSI color codes, prompt markers and shell labels",
        remove_terminal_artifacts,
    ),
    CleaningRule::new(
        "collapse-blank-lines",
        "Collapse runs of blank lines into a single blank line",
        collapse_blank_lines,
    ),
    CleaningRule::new(
        "trim",
        "Trim leading and trailing whitespace from the whole text",
        trim_outer,
    ),
];

/// The process-wide rule catalog, in execution order.
pub fn rules() -> &'static [CleaningRule] {
    &RULES
}

/// Look up a rule by its name.
pub fn find_rule(name: &str) -> Option<&'static CleaningRule> {
    RULES.iter().find(|rule| rule.name == name)
}

/// Apply `f` to every line of `text`, keeping the `\n` separators intact.
pub(crate) fn map_lines<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    text.split('\n').map(&mut f).collect::<Vec<_>>().join("\n")
}
