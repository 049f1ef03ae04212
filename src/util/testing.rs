//! Test doubles for command execution.

use super::cmd::{command_line, CmdError, CmdOutput, CommandRunner};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A single recorded call to [`FakeRunner::run`]
#[derive(Debug, Clone)]
pub struct Invocation {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Final path component of the working directory.
    pub fn dir_name(&self) -> String {
        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn command_line(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        command_line(&self.program, &args)
    }
}

type Responder = Box<dyn Fn(&Invocation) -> Result<CmdOutput, CmdError>>;

/// Records every invocation and answers from a scripted responder.
pub struct FakeRunner {
    responder: Responder,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&Invocation) -> Result<CmdOutput, CmdError> + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations whose command line matches exactly.
    pub fn calls_matching(&self, line: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.command_line() == line)
            .cloned()
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CmdOutput, CmdError> {
        let invocation = Invocation {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        };
        self.calls.borrow_mut().push(invocation.clone());
        (self.responder)(&invocation)
    }
}

pub fn ok(stdout: &str) -> Result<CmdOutput, CmdError> {
    Ok(CmdOutput {
        stdout: stdout.to_string(),
    })
}

pub fn fail(invocation: &Invocation, stdout: &str, stderr: &str) -> Result<CmdOutput, CmdError> {
    Err(CmdError::Failed {
        command: invocation.command_line(),
        code: Some(1),
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    })
}
