//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and root resolution in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use bitengine_setup::config::load_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".bitengine")).unwrap();
//! fs::write(
//!     temp.path().join(".bitengine/setup.yml"),
//!     "runtime:\n  minimum_version: '3.8'\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.runtime.minimum_version, "3.8");
//! assert_eq!(config.build_tool.binary, "premake5");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_value, load_merged_config,
    resolve_project_root, ConfigPaths, CONFIG_DIR, CONFIG_FILE, LOCAL_CONFIG_FILE,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::{BuildToolConfig, GeneratorConfig, RuntimeConfig, SetupConfig};
pub use validator::{validate, validate_config, ValidationError};
