//! bitengine-setup - BitEngine development environment bootstrap.
//!
//! Validates that a recent enough scripting runtime and the Premake build
//! tool are available, then generates project files on the platform the
//! engine's generator script supports.
//!
//! # Modules
//!
//! - [`bootstrap`] - The bootstrap sequence and its outcome
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Project generation script launcher
//! - [`requirements`] - Runtime and build tool checks
//! - [`shell`] - External program execution and platform detection
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use bitengine_setup::shell::{GenerationSupport, HostOs};
//!
//! let support = GenerationSupport::resolve(HostOs::Linux, HostOs::Windows);
//! assert!(!support.is_supported());
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
