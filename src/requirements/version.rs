//! Tool version parsing and comparison.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A `major.minor[.patch]` version number.
///
/// A missing patch component compares equal to `0`, so `3.3` and `3.3.0`
/// are the same version.
#[derive(Debug, Clone, Copy)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl ToolVersion {
    pub fn new(major: u32, minor: u32, patch: Option<u32>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Find the first version number in free-form tool output.
    ///
    /// Handles banners like `Python 3.11.4` or `premake5 (Premake Build Script
    /// Generator) 5.0.0-beta2`.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = RE_VERSION.captures(text)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps.get(3).and_then(|m| m.as_str().parse().ok());
        Some(Self::new(major, minor, patch))
    }

    /// Whether this version is at least `minimum`.
    pub fn satisfies(&self, minimum: &ToolVersion) -> bool {
        self >= minimum
    }

    fn key(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch.unwrap_or(0))
    }
}

impl PartialEq for ToolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ToolVersion {}

impl PartialOrd for ToolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ToolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl FromStr for ToolVersion {
    type Err = String;

    /// Parse a bare version such as `3.3` or `3.10.2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(format!("invalid version '{}': expected major.minor[.patch]", s));
        }

        let parse = |p: &str| {
            p.parse::<u32>()
                .map_err(|_| format!("invalid version '{}': '{}' is not a number", s, p))
        };

        let major = parse(parts[0])?;
        let minor = parse(parts[1])?;
        let patch = parts.get(2).map(|p| parse(p)).transpose()?;
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
