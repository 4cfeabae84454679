//! macOS pbcopy/pbpaste clipboard tool.

use super::{pipe_into, read_from};
use crate::clipboard::tool::{ClipboardMethod, ClipboardTool, ClipboardToolError};

/// macOS clipboard via `pbcopy` and `pbpaste`. Both ship with the OS.
pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pbcopy {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Pbcopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ClipboardToolError> {
        pipe_into("pbcopy", &[], text)
    }

    fn try_paste_text(&self) -> Result<String, ClipboardToolError> {
        read_from("pbpaste", &[])
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
