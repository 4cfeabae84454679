//! Clipboard orchestrator.

use tracing::{debug, warn};

use super::error::{ClipboardError, MAX_CLIPBOARD_BYTES};
use super::tool::{ClipboardMethod, ClipboardTool, ClipboardToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard reads and writes across available tools.
///
/// Tools are tried in priority order; a tool that is missing, unsupported or
/// failing is skipped in favour of the next one.
pub struct Clipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Clipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Copy `text` to the clipboard. Returns the tool that succeeded.
    pub fn copy(&self, text: &str) -> Result<ClipboardMethod, ClipboardError> {
        if text.len() > MAX_CLIPBOARD_BYTES {
            return Err(ClipboardError::too_large(text.len()));
        }
        self.ensure_supported()?;

        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.try_copy_text(text) {
                Ok(()) => {
                    debug!(tool = tool.name(), bytes = text.len(), "Copied text to clipboard");
                    return Ok(tool.method());
                }
                Err(ClipboardToolError::NotSupported | ClipboardToolError::NotFound) => continue,
                Err(ClipboardToolError::Failed(msg)) => {
                    warn!(
                        tool = tool.name(),
                        error = %msg,
                        "Clipboard copy failed, trying next tool"
                    );
                }
            }
        }

        Err(ClipboardError::NoToolAvailable)
    }

    /// Read text from the clipboard.
    pub fn paste(&self) -> Result<String, ClipboardError> {
        self.ensure_supported()?;

        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.try_paste_text() {
                Ok(text) if text.len() > MAX_CLIPBOARD_BYTES => {
                    return Err(ClipboardError::too_large(text.len()));
                }
                Ok(text) => {
                    debug!(tool = tool.name(), bytes = text.len(), "Read text from clipboard");
                    return Ok(text);
                }
                Err(ClipboardToolError::NotSupported | ClipboardToolError::NotFound) => continue,
                Err(ClipboardToolError::Failed(msg)) => {
                    warn!(
                        tool = tool.name(),
                        error = %msg,
                        "Clipboard paste failed, trying next tool"
                    );
                }
            }
        }

        Err(ClipboardError::NoToolAvailable)
    }

    fn ensure_supported(&self) -> Result<(), ClipboardError> {
        if self.tools.is_empty() && !cfg!(any(target_os = "macos", target_os = "linux")) {
            return Err(ClipboardError::UnsupportedPlatform);
        }
        Ok(())
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}
