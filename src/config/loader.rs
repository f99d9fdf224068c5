//! Configuration file discovery, loading and project root resolution.
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults
//! 2. User global config (`~/.bitengine/setup.yml`)
//! 3. Project config (`.bitengine/setup.yml`)
//! 4. Local overrides (`.bitengine/setup.local.yml`)

use crate::config::merger::merge_layers;
use crate::config::schema::SetupConfig;
use crate::config::validator::validate;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-level setup configuration.
pub const CONFIG_DIR: &str = ".bitengine";

/// Project config file name.
pub const CONFIG_FILE: &str = "setup.yml";

/// Local (uncommitted) override file name.
pub const LOCAL_CONFIG_FILE: &str = "setup.local.yml";

/// Existing configuration files for a project.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.bitengine/setup.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .bitengine/setup.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .bitengine/setup.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        let existing = |path: PathBuf| if path.is_file() { Some(path) } else { None };

        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join(CONFIG_FILE))),
            project: existing(project_root.join(CONFIG_DIR).join(CONFIG_FILE)),
            project_local: existing(project_root.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for, in each directory:
/// 1. `.bitengine` directory
/// 2. `premake5.lua` (the workspace build script)
/// 3. `.git` (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir()
            || current.join("premake5.lua").is_file()
            || current.join(".git").exists()
        {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the repository root once at startup.
///
/// An explicit root must exist. Without one, the root is discovered from
/// `cwd`, falling back to `cwd` itself.
///
/// The explicit root is made absolute but not canonicalized: on Windows
/// canonical paths carry the `\\?\` prefix, which `cmd.exe` refuses as a
/// working directory.
pub fn resolve_project_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !absolute.is_dir() {
                return Err(SetupError::RootNotFound { path: absolute });
            }
            Ok(std::path::absolute(&absolute)?)
        }
        None => {
            let root = find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf());
            tracing::debug!("Discovered project root {}", root.display());
            Ok(root)
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    // An empty file is a valid (empty) layer.
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| SetupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge existing layers and parse them into a typed config.
fn load_layers(paths: &[&PathBuf], report_path: &Path) -> Result<SetupConfig> {
    if paths.is_empty() {
        return Ok(SetupConfig::default());
    }

    let mut layers = Vec::new();
    for path in paths {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_layers(&layers)).map_err(|e| SetupError::ConfigParseError {
        path: report_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config layers for a project.
pub fn load_merged_config(project_root: &Path) -> Result<SetupConfig> {
    let paths = ConfigPaths::discover(project_root);
    load_layers(
        &paths.all_existing(),
        &project_root.join(CONFIG_DIR).join(CONFIG_FILE),
    )
}

/// Load and validate config, honoring an optional `--config` override.
///
/// An override file is applied over the built-in defaults only; the other
/// layers are not consulted.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<SetupConfig> {
    let config = match config_override {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            load_layers(&[&path], &path)?
        }
        None => load_merged_config(project_root)?,
    };

    validate(&config)?;
    Ok(config)
}
