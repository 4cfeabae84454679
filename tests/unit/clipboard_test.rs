//! Clipboard orchestration tests with mock tools

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use termclean::clipboard::{
    Clipboard, ClipboardError, ClipboardMethod, ClipboardTool, ClipboardToolError,
    MAX_CLIPBOARD_BYTES,
};

/// Scripted clipboard tool that records how often it was called.
struct MockTool {
    method: ClipboardMethod,
    available: bool,
    copy_result: Result<(), ClipboardToolError>,
    paste_result: Result<String, ClipboardToolError>,
    calls: Arc<AtomicUsize>,
    copied: Arc<Mutex<Option<String>>>,
}

impl MockTool {
    fn new(method: ClipboardMethod) -> Self {
        Self {
            method,
            available: true,
            copy_result: Ok(()),
            paste_result: Ok(String::new()),
            calls: Arc::new(AtomicUsize::new(0)),
            copied: Arc::new(Mutex::new(None)),
        }
    }

    fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    fn copy_fails_with(mut self, err: ClipboardToolError) -> Self {
        self.copy_result = Err(err);
        self
    }

    fn pastes(mut self, result: Result<String, ClipboardToolError>) -> Self {
        self.paste_result = result;
        self
    }
}

impl ClipboardTool for MockTool {
    fn method(&self) -> ClipboardMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ClipboardToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.copy_result.is_ok() {
            *self.copied.lock().unwrap() = Some(text.to_string());
        }
        self.copy_result.clone()
    }

    fn try_paste_text(&self) -> Result<String, ClipboardToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.paste_result.clone()
    }
}

#[test]
fn copy_uses_first_working_tool() {
    let first = MockTool::new(ClipboardMethod::WlClipboard);
    let second = MockTool::new(ClipboardMethod::Xclip);
    let second_calls = Arc::clone(&second.calls);
    let copied = Arc::clone(&first.copied);

    let clipboard = Clipboard::with_tools(vec![Box::new(first), Box::new(second)]);
    let method = clipboard.copy("hello").unwrap();

    assert_eq!(method, ClipboardMethod::WlClipboard);
    assert_eq!(copied.lock().unwrap().as_deref(), Some("hello"));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn copy_skips_unavailable_tools_without_calling_them() {
    let missing = MockTool::new(ClipboardMethod::WlClipboard).unavailable();
    let missing_calls = Arc::clone(&missing.calls);
    let working = MockTool::new(ClipboardMethod::Xclip);

    let clipboard = Clipboard::with_tools(vec![Box::new(missing), Box::new(working)]);

    assert_eq!(clipboard.copy("x").unwrap(), ClipboardMethod::Xclip);
    assert_eq!(missing_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn copy_falls_back_after_failure() {
    let failing = MockTool::new(ClipboardMethod::WlClipboard)
        .copy_fails_with(ClipboardToolError::Failed("exit status 1".to_string()));
    let unsupported =
        MockTool::new(ClipboardMethod::Pbcopy).copy_fails_with(ClipboardToolError::NotSupported);
    let working = MockTool::new(ClipboardMethod::Xclip);

    let clipboard = Clipboard::with_tools(vec![
        Box::new(failing),
        Box::new(unsupported),
        Box::new(working),
    ]);

    assert_eq!(clipboard.copy("x").unwrap(), ClipboardMethod::Xclip);
}

#[test]
fn copy_reports_no_tool_when_all_fail() {
    let clipboard = Clipboard::with_tools(vec![
        Box::new(MockTool::new(ClipboardMethod::WlClipboard).copy_fails_with(
            ClipboardToolError::NotFound,
        )),
        Box::new(
            MockTool::new(ClipboardMethod::Xclip)
                .copy_fails_with(ClipboardToolError::Failed("boom".to_string())),
        ),
    ]);

    assert!(matches!(
        clipboard.copy("x"),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn copy_rejects_oversized_text_before_trying_tools() {
    let tool = MockTool::new(ClipboardMethod::Xclip);
    let calls = Arc::clone(&tool.calls);
    let clipboard = Clipboard::with_tools(vec![Box::new(tool)]);

    let big = "x".repeat(MAX_CLIPBOARD_BYTES + 1);
    assert!(matches!(
        clipboard.copy(&big),
        Err(ClipboardError::TextTooLarge { .. })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn paste_returns_first_successful_read() {
    let failing = MockTool::new(ClipboardMethod::WlClipboard)
        .pastes(Err(ClipboardToolError::Failed("no display".to_string())));
    let working = MockTool::new(ClipboardMethod::Xclip).pastes(Ok("│ copied │".to_string()));

    let clipboard = Clipboard::with_tools(vec![Box::new(failing), Box::new(working)]);
    assert_eq!(clipboard.paste().unwrap(), "│ copied │");
}

#[test]
fn paste_with_no_tools_fails() {
    let clipboard = Clipboard::with_tools(Vec::new());
    assert!(clipboard.paste().is_err());
}

#[test]
fn tool_names_follow_method() {
    let tool = MockTool::new(ClipboardMethod::WlClipboard);
    assert_eq!(tool.name(), "wl-clipboard");
    assert_eq!(ClipboardMethod::Pbcopy.name(), "pbcopy");
    assert_eq!(ClipboardMethod::Xclip.name(), "xclip");
}
