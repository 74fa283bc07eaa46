//! Argument construction and the per-manager flag compatibility table.

use super::PackageManager;
use crate::config::{InstallConfig, PackageFlag};

/// Argument vector for one install invocation, plus the flags the chosen
/// manager had to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    /// Arguments in the order the manager binary expects them.
    pub args: Vec<String>,
    /// Requested flags with no effect for this manager and mode.
    pub ignored_flags: Vec<PackageFlag>,
}

/// What a flag does for one manager in one mode.
enum FlagEffect {
    /// Append this token to the argument vector.
    Append(&'static str),
    /// Drop the flag and report it.
    Ignore,
}

/// The compatibility table, one cell per `(flag, manager)` pair. The match
/// is exhaustive, so a new flag or manager does not compile until every cell
/// has been decided.
fn flag_effect(flag: PackageFlag, manager: PackageManager, global: bool) -> FlagEffect {
    use FlagEffect::{Append, Ignore};
    use PackageFlag::{Bundle, Dev, Exact, NoSave, Verbose};
    use PackageManager::{Npm, Yarn};

    match (flag, manager) {
        // Dev dependencies make no sense for a global install.
        (Dev, _) if global => Ignore,
        (Dev, Npm) => Append("--save-dev"),
        (Dev, Yarn) => Append("--dev"),
        (Exact, Npm) => Append("--save-exact"),
        (Exact, Yarn) => Append("--exact"),
        (Verbose, Npm | Yarn) => Append("--verbose"),
        (Bundle, Npm) => Append("--save-bundle"),
        (Bundle, Yarn) => Ignore,
        (NoSave, Npm) => Append("--no-save"),
        (NoSave, Yarn) => Ignore,
    }
}

impl PackageManager {
    /// Build the argument vector for installing `packages` under `config`.
    ///
    /// Pure and deterministic: identical inputs produce the identical vector
    /// and the identical ignored set, so invocation strings are reproducible.
    pub fn install_args(&self, packages: &[String], config: &InstallConfig) -> InstallArgs {
        let mut args: Vec<String> = Vec::new();

        match self {
            PackageManager::Npm => {
                args.push("install".into());
                if config.global {
                    args.push("-g".into());
                }
            }
            PackageManager::Yarn => {
                if config.force_cwd {
                    args.push("--cwd".into());
                    args.push(config.cwd.to_string_lossy().into_owned());
                }
                if config.global {
                    args.push("global".into());
                }
                args.push("add".into());
            }
        }

        args.extend(packages.iter().cloned());

        let mut ignored_flags = Vec::new();
        for flag in config.flags_to_set() {
            match flag_effect(flag, *self, config.global) {
                FlagEffect::Append(token) => args.push(token.into()),
                FlagEffect::Ignore => ignored_flags.push(flag),
            }
        }

        InstallArgs { args, ignored_flags }
    }
}
