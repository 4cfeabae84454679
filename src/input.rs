//! Input acquisition for the command line shell.
//!
//! Reads raw text from a file, stdin, or the clipboard, enforces the
//! configured size limit and optionally normalizes line endings so the
//! per-line rules see `\n`-separated text.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::clipboard::{self, ClipboardError};
use crate::config::InputConfig;

/// Where to read the text to clean from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Clipboard,
}

impl InputSource {
    /// Resolve CLI arguments into a source. `-` or no file means stdin.
    pub fn from_args(file: Option<&str>, paste: bool) -> Self {
        match (file, paste) {
            (_, true) => Self::Clipboard,
            (None | Some("-"), false) => Self::Stdin,
            (Some(path), false) => Self::File(PathBuf::from(path)),
        }
    }

    /// Short description used in log and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Clipboard => "clipboard".to_string(),
        }
    }
}

/// Errors that can occur while acquiring input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Input too large ({size} bytes). Maximum is {max} bytes (input.max_bytes).")]
    TooLarge { size: u64, max: usize },

    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Read the text to clean from `source`, honouring `config`.
pub fn read_input(source: &InputSource, config: &InputConfig) -> Result<String, InputError> {
    let raw = match source {
        InputSource::File(path) => read_file(path, config.max_bytes)?,
        InputSource::Stdin => read_stream(io::stdin().lock(), config.max_bytes)?,
        InputSource::Clipboard => {
            let text = clipboard::paste_text()?;
            check_size(text.len() as u64, config.max_bytes)?;
            text
        }
    };

    debug!(source = %source.describe(), bytes = raw.len(), "Read input");

    Ok(if config.normalize_line_endings {
        normalize_line_endings(&raw)
    } else {
        raw
    })
}

fn read_file(path: &Path, max_bytes: usize) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    // Check the size before reading to avoid loading huge files
    check_size(fs::metadata(path)?.len(), max_bytes)?;
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read at most `max_bytes` (+1 to detect overflow) from `reader`.
pub fn read_stream<R: Read>(reader: R, max_bytes: usize) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut bytes)?;
    check_size(bytes.len() as u64, max_bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn check_size(size: u64, max: usize) -> Result<(), InputError> {
    if size > max as u64 {
        return Err(InputError::TooLarge { size, max });
    }
    Ok(())
}

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
