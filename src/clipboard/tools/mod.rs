//! Platform clipboard tools.

mod pbcopy;
mod wl;
mod xclip;

pub use pbcopy::Pbcopy;
pub use wl::WlClipboard;
pub use xclip::Xclip;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{ClipboardTool, ClipboardToolError};

/// Tools for the current platform, in priority order.
///
/// Wayland is preferred over X11 when both are installed, since `xclip` under
/// XWayland does not always reach native Wayland clients.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(Pbcopy::new())]
    } else if cfg!(target_os = "linux") {
        vec![Box::new(WlClipboard::new()), Box::new(Xclip::new())]
    } else {
        Vec::new()
    }
}

/// Check whether `program` is on the PATH.
pub(crate) fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` and feed `text` to its stdin.
pub(crate) fn pipe_into(
    program: &str,
    args: &[&str],
    text: &str,
) -> Result<(), ClipboardToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardToolError::Failed(e.to_string()))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardToolError::Failed(format!("{} failed", program)))
    }
}

/// Run `program` and capture its stdout as text.
pub(crate) fn read_from(program: &str, args: &[&str]) -> Result<String, ClipboardToolError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ClipboardToolError::Failed(e.to_string()))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ClipboardToolError::Failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
