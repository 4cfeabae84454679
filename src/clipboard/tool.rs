//! Clipboard tool trait and identifiers.

/// Which platform tool moved the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMethod {
    /// macOS `pbcopy` / `pbpaste`
    Pbcopy,
    /// Wayland `wl-copy` / `wl-paste`
    WlClipboard,
    /// X11 `xclip`
    Xclip,
}

impl ClipboardMethod {
    /// Human readable tool name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlClipboard => "wl-clipboard",
            Self::Xclip => "xclip",
        }
    }
}

/// Error from a single tool attempt. The orchestrator moves on to the next
/// tool on any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardToolError {
    /// The tool binary is not installed.
    NotFound,
    /// The tool does not support this direction.
    NotSupported,
    /// The tool ran and failed.
    Failed(String),
}

/// A platform clipboard tool.
pub trait ClipboardTool: Send + Sync {
    fn method(&self) -> ClipboardMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this machine right now.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), ClipboardToolError>;

    fn try_paste_text(&self) -> Result<String, ClipboardToolError>;
}
