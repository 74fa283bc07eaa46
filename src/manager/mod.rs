//! Manager selection: which of npm and yarn to drive, and how.
//!
//! [`PackageManager`] is the two-variant enum everything else hangs off.
//! [`detect`] holds the probes (user agent, lock files, availability),
//! [`select`] the policy combining them, and [`args`] the argument builder
//! with the per-manager flag compatibility table.

mod args;
pub(crate) mod detect;
pub(crate) mod select;

pub use args::InstallArgs;
pub use detect::{is_manager_installed, manager_from_lockfiles, manager_from_user_agent};
pub use select::select_manager;

use serde::{Deserialize, Serialize};

/// The supported package managers.
///
/// There is no third variant, so a preference for anything else is
/// unrepresentable rather than silently normalized away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Name of the executable to spawn.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// The one remaining fallback candidate.
    pub fn other(&self) -> Self {
        match self {
            PackageManager::Npm => PackageManager::Yarn,
            PackageManager::Yarn => PackageManager::Npm,
        }
    }

    /// Lock file this manager leaves at the project root.
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Arguments for a project-wide install with no package list.
    pub fn project_install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm | PackageManager::Yarn => &["install"],
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_names() {
        assert_eq!(PackageManager::Npm.binary(), "npm");
        assert_eq!(PackageManager::Yarn.binary(), "yarn");
    }

    #[test]
    fn test_other_swaps_managers() {
        assert_eq!(PackageManager::Npm.other(), PackageManager::Yarn);
        assert_eq!(PackageManager::Yarn.other(), PackageManager::Npm);
    }

    #[test]
    fn test_lockfile_names() {
        assert_eq!(PackageManager::Npm.lockfile(), "package-lock.json");
        assert_eq!(PackageManager::Yarn.lockfile(), "yarn.lock");
    }

    #[test]
    fn test_project_install_args() {
        assert_eq!(PackageManager::Npm.project_install_args(), ["install"]);
        assert_eq!(PackageManager::Yarn.project_install_args(), ["install"]);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&PackageManager::Yarn).unwrap(),
            "\"yarn\""
        );
        let manager: PackageManager = serde_json::from_str("\"npm\"").unwrap();
        assert_eq!(manager, PackageManager::Npm);
    }
}
