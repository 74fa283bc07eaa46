//! The install entry points: normalize, select, build, run.

use serde::Serialize;

use crate::config::{InstallConfig, PackageFlag};
use crate::error::InstallError;
use crate::exec::{self, ProcessOutput};
use crate::manager::select_manager;
use crate::packages::Packages;

/// Result of a named-package install: the process outcome plus the flags
/// the chosen manager dropped.
#[derive(Debug, Clone, Serialize)]
pub struct InstallResult {
    pub output: ProcessOutput,
    /// Requested flags that had no effect for the chosen manager and mode.
    pub ignored_flags: Vec<PackageFlag>,
}

/// Install `packages` with whichever manager the selection policy picks.
///
/// Exactly one subprocess runs per call, after selection has settled. The
/// subprocess failing is reported through
/// [`ProcessOutput::failed`](crate::ProcessOutput), not as an error.
///
/// ```no_run
/// use pkg_install::{install, InstallConfig};
///
/// # async fn demo() -> Result<(), pkg_install::InstallError> {
/// let result = install(
///     ["twilio", "node-env-run"],
///     InstallConfig {
///         dev: true,
///         ..Default::default()
///     },
/// )
/// .await?;
/// assert!(!result.output.failed);
/// # Ok(())
/// # }
/// ```
pub async fn install(
    packages: impl Into<Packages>,
    config: InstallConfig,
) -> Result<InstallResult, InstallError> {
    let package_list = packages.into().to_list();
    let manager = select_manager(&config).await?;
    let install_args = manager.install_args(&package_list, &config);

    let output = exec::run(manager.binary(), &install_args.args, &config).await?;
    Ok(InstallResult {
        output,
        ignored_flags: install_args.ignored_flags,
    })
}

/// Run the selected manager's own project-wide install (`npm install` or
/// `yarn install`) with no package arguments. No per-flag logic applies.
pub async fn project_install(config: InstallConfig) -> Result<ProcessOutput, InstallError> {
    let manager = select_manager(&config).await?;
    let args: Vec<String> = manager
        .project_install_args()
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    exec::run(manager.binary(), &args, &config).await
}
