//! Install npm or yarn packages from Rust with one uniform API.
//!
//! The library decides which package manager to drive, translates a
//! manager-agnostic option set into the right command line for it, and
//! relays the subprocess result. Selection follows a fixed priority: an
//! explicit preference, then the user agent of the npm or yarn script that
//! invoked this process, then lock files next to the project, then npm, with
//! a single availability fallback to the other manager. When neither manager
//! answers a version probe, [`InstallError::NoManagerFound`] is returned and
//! no subprocess is spawned.
//!
//! Flags the chosen manager cannot honor (for example `dev` combined with
//! `global`, or npm-only flags under yarn) are dropped and reported back in
//! [`InstallResult::ignored_flags`] instead of failing the install.
//!
//! # Example
//!
//! ```no_run
//! use pkg_install::{InstallConfig, install};
//!
//! # async fn demo() -> Result<(), pkg_install::InstallError> {
//! let result = install(
//!     ["twilio"],
//!     InstallConfig {
//!         dev: true,
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! assert!(!result.output.failed);
//! # Ok(())
//! # }
//! ```
//!
//! Blocking twins of every entry point live in [`blocking`].

pub mod blocking;
mod config;
mod error;
mod exec;
mod install;
mod manager;
mod packages;

pub use config::{InstallConfig, PackageFlag, StdioMode, StdioSpec};
pub use error::InstallError;
pub use exec::ProcessOutput;
pub use install::{InstallResult, install, project_install};
pub use manager::{
    InstallArgs, PackageManager, is_manager_installed, manager_from_lockfiles,
    manager_from_user_agent, select_manager,
};
pub use packages::Packages;
