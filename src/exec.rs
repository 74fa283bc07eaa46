//! Async subprocess execution for the selected manager.

use std::process::Stdio;

use serde::Serialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::{InstallConfig, StdioMode};
use crate::error::InstallError;

/// Outcome of one package manager invocation.
///
/// `failed` is the only field the library itself looks at; everything else
/// is relayed to the caller untouched. A non-zero exit is data, not an
/// error.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutput {
    /// The rendered command line, for diagnostics.
    pub command: String,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    /// Captured standard output; empty unless the stream was piped.
    pub stdout: String,
    /// Captured standard error; empty unless the stream was piped.
    pub stderr: String,
    /// Whether the process reported failure.
    pub failed: bool,
}

impl ProcessOutput {
    pub(crate) fn from_output(command: String, output: std::process::Output) -> Self {
        Self {
            command,
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            failed: !output.status.success(),
        }
    }
}

pub(crate) fn render_command(program: &str, args: &[String]) -> String {
    let mut command = String::from(program);
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

fn stdio_for(mode: StdioMode) -> Stdio {
    match mode {
        StdioMode::Pipe => Stdio::piped(),
        StdioMode::Ignore => Stdio::null(),
        StdioMode::Inherit => Stdio::inherit(),
    }
}

/// Run `program` under the configured working directory and I/O disposition.
///
/// Only a spawn failure errors out; whatever the process itself reports ends
/// up in the returned record.
pub(crate) async fn run(
    program: &str,
    args: &[String],
    config: &InstallConfig,
) -> Result<ProcessOutput, InstallError> {
    let command_line = render_command(program, args);
    debug!(cwd = %config.cwd.display(), "running {command_line}");

    let child = Command::new(program)
        .args(args)
        .current_dir(&config.cwd)
        .stdin(stdio_for(config.stdio.stdin()))
        .stdout(stdio_for(config.stdio.stdout()))
        .stderr(stdio_for(config.stdio.stderr()))
        .spawn()
        .map_err(|source| InstallError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|source| InstallError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    Ok(ProcessOutput::from_output(command_line, output))
}
