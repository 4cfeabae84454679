//! Clipboard access for the command line shell.
//!
//! The cleaner itself never touches the clipboard; this module lets the CLI
//! read its input from, and write its output to, the system clipboard by
//! shelling out to the platform tools (`pbcopy`/`pbpaste`, `wl-copy`/`wl-paste`,
//! `xclip`).
//!
//! # Example
//!
//! ```ignore
//! use termclean::clipboard::{copy_text, paste_text};
//!
//! let raw = paste_text()?;
//! let tool = copy_text(&termclean::clean(&raw))?;
//! println!("Copied with {}", tool.name());
//! ```

mod access;
mod error;
pub mod tool;
pub mod tools;

pub use access::Clipboard;
pub use error::{ClipboardError, MAX_CLIPBOARD_BYTES};
pub use tool::{ClipboardMethod, ClipboardTool, ClipboardToolError};

/// Copy `text` to the system clipboard using the first tool that works.
///
/// # Errors
/// - `ClipboardError::TextTooLarge` - text exceeds [`MAX_CLIPBOARD_BYTES`]
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found or all failed
pub fn copy_text(text: &str) -> Result<ClipboardMethod, ClipboardError> {
    Clipboard::new().copy(text)
}

/// Read text from the system clipboard using the first tool that works.
///
/// # Errors
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found or all failed
/// - `ClipboardError::TextTooLarge` - clipboard content exceeds [`MAX_CLIPBOARD_BYTES`]
pub fn paste_text() -> Result<String, ClipboardError> {
    Clipboard::new().paste()
}
