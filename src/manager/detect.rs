//! Probes that infer which package manager applies.
//!
//! Each probe is independent; [`select`](super::select) combines them. None
//! of the probes cache anything, so every call sees the current state of the
//! environment, the filesystem, and the installed binaries.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::PackageManager;

/// Environment variable npm and yarn set for the scripts they spawn.
const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Query argument used to check that a manager binary actually runs.
pub(crate) const VERSION_ARG: &str = "--version";

/// Manager implied by the user agent of the tool that invoked this process.
///
/// Running under `npm run` or `yarn run` sets `npm_config_user_agent` to
/// something like `yarn/1.22.22 npm/? node/v20.11.1 linux x64`. Absent or
/// unrecognized values report `None`.
pub fn manager_from_user_agent() -> Option<PackageManager> {
    let user_agent = std::env::var(USER_AGENT_VAR).ok()?;
    manager_from_agent_string(&user_agent)
}

pub(crate) fn manager_from_agent_string(user_agent: &str) -> Option<PackageManager> {
    if user_agent.starts_with("npm") {
        Some(PackageManager::Npm)
    } else if user_agent.starts_with("yarn") {
        Some(PackageManager::Yarn)
    } else {
        None
    }
}

/// Manager implied by the lock file at the root of `cwd`.
///
/// npm's lock file wins when both are present. A missing file is the normal
/// "unknown" outcome, never an error.
pub async fn manager_from_lockfiles(cwd: &Path) -> Option<PackageManager> {
    for manager in [PackageManager::Npm, PackageManager::Yarn] {
        let lockfile = cwd.join(manager.lockfile());
        if tokio::fs::try_exists(&lockfile).await.unwrap_or(false) {
            debug!(lockfile = %lockfile.display(), "lock file implies {manager}");
            return Some(manager);
        }
    }
    None
}

/// Whether the manager binary is present and answers a version query.
///
/// A binary that cannot be found, cannot be executed, or exits with failure
/// all count as "not installed".
pub async fn is_manager_installed(manager: PackageManager) -> bool {
    if which::which(manager.binary()).is_err() {
        return false;
    }

    Command::new(manager.binary())
        .arg(VERSION_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}
