//! Host platform detection.
//!
//! The operating system is resolved once at startup into a [`HostOs`], and
//! compared with the generator's target platform into a [`GenerationSupport`].

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Known host operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    Macos,
    Linux,
    Other,
}

impl HostOs {
    /// Detect the operating system this binary is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Parse an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "windows" => HostOs::Windows,
            "macos" | "darwin" => HostOs::Macos,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }
}

impl FromStr for HostOs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(HostOs::Windows),
            "macos" | "darwin" => Ok(HostOs::Macos),
            "linux" => Ok(HostOs::Linux),
            "other" => Ok(HostOs::Other),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostOs::Windows => "windows",
            HostOs::Macos => "macos",
            HostOs::Linux => "linux",
            HostOs::Other => "other",
        };
        f.write_str(name)
    }
}

/// Whether project generation can run on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSupport {
    /// The host matches the generator's platform.
    Supported,
    /// The generator does not target this host; generation is skipped.
    Unsupported,
}

impl GenerationSupport {
    /// Compare the host against the generator's target platform.
    pub fn resolve(host: HostOs, target: HostOs) -> Self {
        if host == target {
            GenerationSupport::Supported
        } else {
            GenerationSupport::Unsupported
        }
    }

    /// Resolve against the OS this binary is running on.
    pub fn for_current_host(target: HostOs) -> Self {
        Self::resolve(HostOs::current(), target)
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, GenerationSupport::Supported)
    }
}

/// Check if running in a CI environment.
///
/// Used to force the plain non-interactive UI in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_os_from_os_name() {
        assert_eq!(HostOs::from_os_name("windows"), HostOs::Windows);
        assert_eq!(HostOs::from_os_name("macos"), HostOs::Macos);
        assert_eq!(HostOs::from_os_name("linux"), HostOs::Linux);
        assert_eq!(HostOs::from_os_name("freebsd"), HostOs::Other);
    }

    #[test]
    fn host_os_parse_is_case_insensitive() {
        assert_eq!("Windows".parse::<HostOs>(), Ok(HostOs::Windows));
        assert_eq!("LINUX".parse::<HostOs>(), Ok(HostOs::Linux));
        assert!("amiga".parse::<HostOs>().is_err());
    }

    #[test]
    fn host_os_display_round_trips_through_parse() {
        for os in [HostOs::Windows, HostOs::Macos, HostOs::Linux, HostOs::Other] {
            assert_eq!(os.to_string().parse::<HostOs>(), Ok(os));
        }
    }

    #[test]
    fn current_matches_compile_target() {
        let host = HostOs::current();
        if cfg!(target_os = "windows") {
            assert_eq!(host, HostOs::Windows);
        } else if cfg!(target_os = "linux") {
            assert_eq!(host, HostOs::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(host, HostOs::Macos);
        }
    }

    #[test]
    fn generation_supported_only_on_exact_match() {
        assert_eq!(
            GenerationSupport::resolve(HostOs::Windows, HostOs::Windows),
            GenerationSupport::Supported
        );
        assert_eq!(
            GenerationSupport::resolve(HostOs::Linux, HostOs::Windows),
            GenerationSupport::Unsupported
        );
        assert_eq!(
            GenerationSupport::resolve(HostOs::Other, HostOs::Other),
            GenerationSupport::Supported
        );
    }

    #[test]
    fn host_os_deserializes_lowercase() {
        let os: HostOs = serde_yaml::from_str("windows").unwrap();
        assert_eq!(os, HostOs::Windows);
    }

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }
}
