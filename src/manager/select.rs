//! The policy that turns probe signals into exactly one manager.

use tracing::debug;

use super::{PackageManager, detect};
use crate::config::InstallConfig;
use crate::error::InstallError;

/// First non-unknown signal wins: explicit preference, then the invoking
/// tool's user agent, then lock files, then npm.
pub(crate) fn candidate(
    prefer: Option<PackageManager>,
    user_agent: Option<PackageManager>,
    lockfile: Option<PackageManager>,
) -> PackageManager {
    prefer
        .or(user_agent)
        .or(lockfile)
        .unwrap_or(PackageManager::Npm)
}

/// Pick the manager to drive for `config`.
///
/// The candidate from the signal chain gets one availability probe; if it
/// fails, the other manager gets the one remaining probe. At most two probes
/// per call, nothing cached between calls.
pub async fn select_manager(config: &InstallConfig) -> Result<PackageManager, InstallError> {
    let first = candidate(
        config.prefer,
        detect::manager_from_user_agent(),
        detect::manager_from_lockfiles(&config.cwd).await,
    );

    if detect::is_manager_installed(first).await {
        debug!("selected {first}");
        return Ok(first);
    }

    let fallback = first.other();
    if detect::is_manager_installed(fallback).await {
        debug!("{first} unavailable, falling back to {fallback}");
        return Ok(fallback);
    }

    Err(InstallError::NoManagerFound)
}
