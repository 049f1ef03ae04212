//! External command execution.
//!
//! Every recipe in the crate shells out through a [`CommandRunner`], so the
//! subcommands can be exercised against a recording fake in tests while
//! [`SystemRunner`] spawns real processes.

use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while running an external command
#[derive(Error, Debug)]
pub enum CmdError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", failure_detail(.code, .stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl CmdError {
    /// Everything the child wrote before failing (stdout, then stderr).
    ///
    /// `None` when the process never ran.
    pub fn captured_output(&self) -> Option<String> {
        match self {
            CmdError::Failed { stdout, stderr, .. } => {
                let mut text = stdout.clone();
                if !stderr.is_empty() {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                    text.push_str(stderr);
                }
                Some(text)
            }
            _ => None,
        }
    }
}

fn failure_detail(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

/// Captured stdout of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    pub stdout: String,
}

/// Runs a program with a working directory and captures its output.
///
/// Implementations block until the child exits. A non-zero exit status is
/// reported as [`CmdError::Failed`] with whatever the child captured.
pub trait CommandRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CmdOutput, CmdError>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CmdOutput, CmdError> {
        let resolved = which::which(program).map_err(|_| CmdError::NotFound {
            program: program.to_string(),
        })?;

        let mut cmd = Command::new(resolved);
        cmd.args(args).current_dir(dir);
        log_cmd(&cmd);
        let output = cmd.output().map_err(|source| CmdError::Spawn {
            program: program.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(CmdError::Failed {
                command: command_line(program, args),
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        // Progress chatter (e.g. "Switched to branch") only goes to the log
        if !stderr.trim().is_empty() {
            debug!(target: "gobot::cmd", %program, stderr = %stderr.trim(), "stderr");
        }

        Ok(CmdOutput { stdout })
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Log a command just before execution.
///
/// Emits a `tracing::debug!` event with the program name, arguments, and
/// working directory. Visible with `RUST_LOG=gobot::cmd=debug`.
pub fn log_cmd(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cwd = cmd
        .get_current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    debug!(
        target: "gobot::cmd",
        %program,
        ?args,
        %cwd,
        "exec"
    );
}
