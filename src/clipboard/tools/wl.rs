//! Wayland wl-clipboard tool.

use super::{pipe_into, read_from, tool_exists};
use crate::clipboard::tool::{ClipboardMethod, ClipboardTool, ClipboardToolError};

/// Wayland clipboard via `wl-copy` and `wl-paste`.
///
/// Only considered available inside a Wayland session (`WAYLAND_DISPLAY`).
pub struct WlClipboard;

impl WlClipboard {
    pub fn new() -> Self {
        Self
    }

    fn in_wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some()
    }
}

impl ClipboardTool for WlClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::in_wayland_session() && tool_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ClipboardToolError> {
        pipe_into("wl-copy", &[], text)
    }

    fn try_paste_text(&self) -> Result<String, ClipboardToolError> {
        if !tool_exists("wl-paste") {
            return Err(ClipboardToolError::NotFound);
        }
        // --no-newline: wl-paste appends one by default
        read_from("wl-paste", &["--no-newline"])
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
