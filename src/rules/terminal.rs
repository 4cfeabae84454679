//! Terminal artifact removal: SGR color codes, prompt markers, shell labels.
//!
//! Only SGR (`ESC [ ... m`) is targeted. This is a cleaner for pasted text,
//! not a terminal emulator: cursor movement and other CSI sequences are out
//! of scope.

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_SGR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid regex"));

/// A single `$` or `>` at line start plus the whitespace after it.
static PROMPT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[$>][ \t]*").expect("valid regex"));

static SHELL_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^(?:bash|sh|cmd|powershell):[ \t]+").expect("valid regex")
});

/// Strip SGR sequences, then prompt markers, then shell-name labels.
pub fn remove_terminal_artifacts(text: &str) -> String {
    let text = ANSI_SGR.replace_all(text, "");
    let text = PROMPT_MARKER.replace_all(&text, "");
    SHELL_LABEL.replace_all(&text, "").into_owned()
}
