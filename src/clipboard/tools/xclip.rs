//! Linux xclip clipboard tool.

use super::{pipe_into, read_from, tool_exists};
use crate::clipboard::tool::{ClipboardMethod, ClipboardTool, ClipboardToolError};

/// Linux X11 clipboard tool using xclip.
///
/// Always targets the `clipboard` selection (Ctrl+C / Ctrl+V), not `primary`.
pub struct Xclip;

impl Xclip {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xclip")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ClipboardToolError> {
        pipe_into("xclip", &["-selection", "clipboard"], text)
    }

    fn try_paste_text(&self) -> Result<String, ClipboardToolError> {
        read_from("xclip", &["-selection", "clipboard", "-o"])
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
