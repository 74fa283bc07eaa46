//! Install configuration and the flag set shared by both managers.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::manager::PackageManager;

/// What to do with one standard I/O stream of the spawned package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdioMode {
    /// Capture the stream into the result record.
    #[default]
    Pipe,
    /// Discard the stream.
    Ignore,
    /// Attach the stream to the calling process.
    Inherit,
}

/// I/O disposition for the spawned process: one mode for all three streams,
/// or a per-stream assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StdioSpec {
    Uniform(StdioMode),
    Streams {
        stdin: StdioMode,
        stdout: StdioMode,
        stderr: StdioMode,
    },
}

impl StdioSpec {
    pub fn stdin(&self) -> StdioMode {
        match *self {
            StdioSpec::Uniform(mode) => mode,
            StdioSpec::Streams { stdin, .. } => stdin,
        }
    }

    pub fn stdout(&self) -> StdioMode {
        match *self {
            StdioSpec::Uniform(mode) => mode,
            StdioSpec::Streams { stdout, .. } => stdout,
        }
    }

    pub fn stderr(&self) -> StdioMode {
        match *self {
            StdioSpec::Uniform(mode) => mode,
            StdioSpec::Streams { stderr, .. } => stderr,
        }
    }
}

impl Default for StdioSpec {
    fn default() -> Self {
        StdioSpec::Uniform(StdioMode::Pipe)
    }
}

/// Flags a manager may have to drop and report back.
///
/// `global` and `force_cwd` change the shape of the command instead of
/// appending a token, so they are not part of this set. The variant order is
/// the order in which flags are appended to the argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageFlag {
    Dev,
    Exact,
    Verbose,
    Bundle,
    NoSave,
}

impl PackageFlag {
    /// Every ignorable flag, in append order.
    pub const ALL: [PackageFlag; 5] = [
        PackageFlag::Dev,
        PackageFlag::Exact,
        PackageFlag::Verbose,
        PackageFlag::Bundle,
        PackageFlag::NoSave,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PackageFlag::Dev => "dev",
            PackageFlag::Exact => "exact",
            PackageFlag::Verbose => "verbose",
            PackageFlag::Bundle => "bundle",
            PackageFlag::NoSave => "no_save",
        }
    }
}

impl std::fmt::Display for PackageFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options for [`install`](crate::install) and its blocking twin.
///
/// Every call constructs its own configuration; nothing is shared or mutated
/// afterwards. Overrides merge over the defaults with struct update syntax:
///
/// ```
/// use pkg_install::InstallConfig;
///
/// let config = InstallConfig {
///     dev: true,
///     ..Default::default()
/// };
/// assert!(config.dev);
/// assert!(!config.global);
/// ```
///
/// The same merge works for configuration read from JSON, where missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Force a package manager instead of detecting one.
    pub prefer: Option<PackageManager>,
    /// Install the packages as dev dependencies.
    pub dev: bool,
    /// Pin the exact version instead of a range.
    pub exact: bool,
    /// Do not write the dependency to the manifest (npm only).
    pub no_save: bool,
    /// Save as a bundled dependency (npm only).
    pub bundle: bool,
    /// Run the package manager in verbose mode.
    pub verbose: bool,
    /// Install packages globally.
    pub global: bool,
    /// Pass the working directory on the command line (yarn only).
    pub force_cwd: bool,
    /// I/O disposition for the spawned process.
    pub stdio: StdioSpec,
    /// Directory the package manager runs in.
    pub cwd: PathBuf,
}

impl Default for InstallConfig {
    /// The working directory is captured here, at construction time, not
    /// when the install runs.
    fn default() -> Self {
        Self {
            prefer: None,
            dev: false,
            exact: false,
            no_save: false,
            bundle: false,
            verbose: false,
            global: false,
            force_cwd: false,
            stdio: StdioSpec::default(),
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl InstallConfig {
    fn flag_value(&self, flag: PackageFlag) -> bool {
        match flag {
            PackageFlag::Dev => self.dev,
            PackageFlag::Exact => self.exact,
            PackageFlag::Verbose => self.verbose,
            PackageFlag::Bundle => self.bundle,
            PackageFlag::NoSave => self.no_save,
        }
    }

    /// Requested flags, in append order. Flags left `false` never show up
    /// anywhere, including in the ignored list.
    pub fn flags_to_set(&self) -> Vec<PackageFlag> {
        PackageFlag::ALL
            .into_iter()
            .filter(|flag| self.flag_value(*flag))
            .collect()
    }
}
