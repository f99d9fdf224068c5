//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled output on a terminal
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for recording output in tests
//!
//! # Example
//!
//! ```
//! use bitengine_setup::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.progress("Running premake...");
//! ui.success("Setup completed!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

/// Trait for user interface interactions.
///
/// This trait allows recording the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user. Shown in every output mode, so
    /// diagnostics go through here.
    fn message(&mut self, msg: &str);

    /// Display a progress line. Hidden in quiet mode.
    fn progress(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner. Hidden in quiet mode.
    fn show_header(&mut self, title: &str);
}
