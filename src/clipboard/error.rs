//! Clipboard operation errors.

/// Maximum text size moved through the clipboard (10 MB).
pub const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip or wl-clipboard.")]
    NoToolAvailable,

    #[error("Text too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    TextTooLarge { size_mb: f64, max_mb: usize },

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}

impl ClipboardError {
    pub(crate) fn too_large(size_bytes: usize) -> Self {
        Self::TextTooLarge {
            size_mb: size_bytes as f64 / (1024.0 * 1024.0),
            max_mb: MAX_CLIPBOARD_BYTES / (1024 * 1024),
        }
    }
}
