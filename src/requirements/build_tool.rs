//! Build tool presence validation.

use std::path::{Path, PathBuf};

use crate::config::BuildToolConfig;

use super::probe::{parse_system_path, resolve_in_root, resolve_tool_path};

/// Checks that the build-configuration generator is installed.
///
/// Never fails: an absent tool is a `None`/`false` answer.
pub trait BuildToolCheck {
    /// Display name used in messages.
    fn name(&self) -> &str;

    /// Locate the tool for the project at `root`.
    fn locate(&self, root: &Path) -> Option<PathBuf>;

    /// Whether the tool is installed and usable.
    fn is_installed(&self, root: &Path) -> bool {
        self.locate(root).is_some()
    }
}

/// Finds a binary in root-relative vendor directories, then on PATH.
#[derive(Debug, Clone)]
pub struct BinaryLocator {
    name: String,
    binary: String,
    search_paths: Vec<PathBuf>,
    system_path: Option<Vec<PathBuf>>,
}

impl BinaryLocator {
    /// Build from the `build_tool` config section, reading the real PATH.
    pub fn from_config(config: &BuildToolConfig) -> Self {
        let system_path = if config.use_system_path {
            Some(parse_system_path())
        } else {
            None
        };
        Self {
            name: config.name.clone(),
            binary: config.binary.clone(),
            search_paths: config.search_paths.clone(),
            system_path,
        }
    }

    /// Replace the PATH directories consulted after the vendor directories.
    pub fn with_system_path(mut self, dirs: Vec<PathBuf>) -> Self {
        self.system_path = Some(dirs);
        self
    }

    /// Only look in the vendor directories.
    pub fn without_system_path(mut self) -> Self {
        self.system_path = None;
        self
    }
}

impl BuildToolCheck for BinaryLocator {
    fn name(&self) -> &str {
        &self.name
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        if let Some(found) = resolve_in_root(&self.binary, root, &self.search_paths) {
            tracing::debug!("Found {} at {}", self.name, found.display());
            return Some(found);
        }

        let found = self
            .system_path
            .as_deref()
            .and_then(|dirs| resolve_tool_path(&self.binary, dirs));

        match &found {
            Some(path) => tracing::debug!("Found {} on PATH at {}", self.name, path.display()),
            None => tracing::debug!("{} ({}) not found", self.name, self.binary),
        }
        found
    }
}
