//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and records every call for
//! later assertion, both per kind and as one ordered transcript.
//!
//! # Example
//!
//! ```
//! use bitengine_setup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.progress("Running premake...");
//! ui.success("Setup completed!");
//!
//! assert!(ui.has_progress("Running premake"));
//! assert_eq!(ui.transcript(), ["Running premake...", "✓ Setup completed!"]);
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default, Clone)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    progress: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured progress lines.
    pub fn progress_lines(&self) -> &[String] {
        &self.progress
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every call in order, with the icon the plain UI would print.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific progress line was shown.
    pub fn has_progress(&self, msg: &str) -> bool {
        self.progress.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn progress(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            self.progress.push(msg.to_string());
            self.transcript.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(format!("✓ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(format!("✗ {}", msg));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
    }
}
