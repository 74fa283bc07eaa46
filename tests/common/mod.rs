//! Shared harness for driving the install entry points against stub
//! package manager binaries on a private `PATH`.

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Directory of stub `npm`/`yarn` executables. Every stub appends its
/// argument line to `<name>.log` so tests can count invocations.
pub struct FakeManagers {
    bin_dir: TempDir,
}

impl FakeManagers {
    pub fn new() -> Result<Self> {
        Ok(Self {
            bin_dir: tempfile::tempdir()?,
        })
    }

    pub fn bin_path(&self) -> &Path {
        self.bin_dir.path()
    }

    /// Stub that answers any call, echoing its arguments on stdout.
    pub fn add_manager(&self, name: &str) -> Result<()> {
        self.add_script(name, "echo \"$@\"\nexit 0\n")
    }

    /// Stub that answers the version probe but fails every other call.
    pub fn add_failing_manager(&self, name: &str, exit_code: i32) -> Result<()> {
        let body = format!(
            "if [ \"$1\" = \"--version\" ]; then\n  echo 1.0.0\n  exit 0\nfi\nexit {exit_code}\n"
        );
        self.add_script(name, &body)
    }

    /// Stub whose version probe itself fails.
    pub fn add_broken_manager(&self, name: &str) -> Result<()> {
        self.add_script(name, "exit 1\n")
    }

    /// Argument lines the stub has been called with so far.
    pub fn calls(&self, name: &str) -> Result<Vec<String>> {
        let log = self.log_path(name);
        if !log.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(log)?
            .lines()
            .map(str::to_owned)
            .collect())
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.bin_dir.path().join(format!("{name}.log"))
    }

    fn add_script(&self, name: &str, body: &str) -> Result<()> {
        let path = self.bin_dir.path().join(name);
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> {}\n{}",
            self.log_path(name).display(),
            body
        );
        fs::write(&path, script)?;
        let mut permissions = fs::metadata(&path)?.permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions)?;
        Ok(())
    }
}

/// Points `PATH` at the stub directory for the lifetime of the guard.
/// Tests using this must run serially.
pub struct PathGuard {
    saved: Option<OsString>,
}

impl PathGuard {
    pub fn set(dir: &Path) -> Self {
        let saved = std::env::var_os("PATH");
        unsafe { std::env::set_var("PATH", dir) };
        Self { saved }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.saved {
                Some(saved) => std::env::set_var("PATH", saved),
                None => std::env::remove_var("PATH"),
            }
        }
    }
}

/// Same guard for the `npm_config_user_agent` variable.
pub struct UserAgentGuard {
    saved: Option<OsString>,
}

impl UserAgentGuard {
    const VAR: &'static str = "npm_config_user_agent";

    pub fn set(value: &str) -> Self {
        let saved = std::env::var_os(Self::VAR);
        unsafe { std::env::set_var(Self::VAR, value) };
        Self { saved }
    }

    pub fn clear() -> Self {
        let saved = std::env::var_os(Self::VAR);
        unsafe { std::env::remove_var(Self::VAR) };
        Self { saved }
    }
}

impl Drop for UserAgentGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.saved {
                Some(saved) => std::env::set_var(Self::VAR, saved),
                None => std::env::remove_var(Self::VAR),
            }
        }
    }
}
