//! Blocking twins of the probes, the selector, and the install entry points.
//!
//! Same signals, same policy, same argument construction as the async API;
//! the only difference is that every probe and the final invocation run to
//! completion on the calling thread.

use std::path::Path;

use duct::cmd;
use tracing::debug;

use crate::config::{InstallConfig, StdioMode};
use crate::error::InstallError;
use crate::exec::{ProcessOutput, render_command};
use crate::install::InstallResult;
use crate::manager::detect::VERSION_ARG;
use crate::manager::{PackageManager, select};
use crate::packages::Packages;

pub use crate::manager::manager_from_user_agent;

// =============================================================================
// Probes
// =============================================================================

/// Blocking twin of [`manager_from_lockfiles`](crate::manager_from_lockfiles).
pub fn manager_from_lockfiles(cwd: &Path) -> Option<PackageManager> {
    [PackageManager::Npm, PackageManager::Yarn]
        .into_iter()
        .find(|manager| cwd.join(manager.lockfile()).exists())
}

/// Blocking twin of [`is_manager_installed`](crate::is_manager_installed).
pub fn is_manager_installed(manager: PackageManager) -> bool {
    if which::which(manager.binary()).is_err() {
        return false;
    }

    cmd(manager.binary(), [VERSION_ARG])
        .stdin_null()
        .stdout_null()
        .stderr_null()
        .unchecked()
        .run()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Blocking twin of [`select_manager`](crate::select_manager).
pub fn select_manager(config: &InstallConfig) -> Result<PackageManager, InstallError> {
    let first = select::candidate(
        config.prefer,
        manager_from_user_agent(),
        manager_from_lockfiles(&config.cwd),
    );

    if is_manager_installed(first) {
        debug!("selected {first}");
        return Ok(first);
    }

    let fallback = first.other();
    if is_manager_installed(fallback) {
        debug!("{first} unavailable, falling back to {fallback}");
        return Ok(fallback);
    }

    Err(InstallError::NoManagerFound)
}

// =============================================================================
// Execution
// =============================================================================

fn run(
    program: &str,
    args: &[String],
    config: &InstallConfig,
) -> Result<ProcessOutput, InstallError> {
    let command_line = render_command(program, args);
    debug!(cwd = %config.cwd.display(), "running {command_line}");

    let mut expression = cmd(program, args).dir(&config.cwd).unchecked();
    expression = match config.stdio.stdin() {
        // A pipe with no writer reads as immediate end of input, which is
        // what null gives as well.
        StdioMode::Pipe | StdioMode::Ignore => expression.stdin_null(),
        StdioMode::Inherit => expression,
    };
    expression = match config.stdio.stdout() {
        StdioMode::Pipe => expression.stdout_capture(),
        StdioMode::Ignore => expression.stdout_null(),
        StdioMode::Inherit => expression,
    };
    expression = match config.stdio.stderr() {
        StdioMode::Pipe => expression.stderr_capture(),
        StdioMode::Ignore => expression.stderr_null(),
        StdioMode::Inherit => expression,
    };

    let output = expression.run().map_err(|source| InstallError::Spawn {
        command: command_line.clone(),
        source,
    })?;

    Ok(ProcessOutput::from_output(command_line, output))
}

// =============================================================================
// Install entry points
// =============================================================================

/// Blocking twin of [`install`](crate::install).
pub fn install(
    packages: impl Into<Packages>,
    config: InstallConfig,
) -> Result<InstallResult, InstallError> {
    let package_list = packages.into().to_list();
    let manager = select_manager(&config)?;
    let install_args = manager.install_args(&package_list, &config);

    let output = run(manager.binary(), &install_args.args, &config)?;
    Ok(InstallResult {
        output,
        ignored_flags: install_args.ignored_flags,
    })
}

/// Blocking twin of [`project_install`](crate::project_install).
pub fn project_install(config: InstallConfig) -> Result<ProcessOutput, InstallError> {
    let manager = select_manager(&config)?;
    let args: Vec<String> = manager
        .project_install_args()
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    run(manager.binary(), &args, &config)
}
