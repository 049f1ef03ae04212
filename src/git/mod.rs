//! Git recipes
//!
//! Thin wrappers over the `git` CLI. Argument lists mirror what a user would
//! type so the captured output (oneline logs, short status) can be echoed
//! back unchanged.

pub mod branch;
pub mod log;
pub mod remote;
pub mod status;

pub use branch::{checkout, current_branch};
pub use log::{commits_since, current_head, head_revision, Head};
pub use remote::pull_rebase;
pub use status::status_short;

use crate::util::cmd::{CmdError, CommandRunner};
use std::path::Path;
use thiserror::Error;

/// Name of the source-control executable
pub const GIT: &str = "git";

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error(transparent)]
    Command(#[from] CmdError),

    #[error("no commits found in {0}")]
    NoCommits(String),
}

/// Run `git <args>` in `dir` and return its stdout.
pub(crate) fn run_git(
    runner: &dyn CommandRunner,
    dir: &Path,
    args: &[&str],
) -> Result<String, GitError> {
    Ok(runner.run(dir, GIT, args)?.stdout)
}
