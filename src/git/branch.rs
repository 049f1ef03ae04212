//! Git branch operations

use super::{run_git, GitError};
use crate::util::cmd::CommandRunner;
use std::path::Path;

/// Get the current branch name (`HEAD` when detached)
pub fn current_branch(runner: &dyn CommandRunner, dir: &Path) -> Result<String, GitError> {
    let out = run_git(runner, dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(out.trim().to_string())
}

/// `git checkout <reference>`, returning whatever git printed to stdout.
pub fn checkout(
    runner: &dyn CommandRunner,
    dir: &Path,
    reference: &str,
) -> Result<String, GitError> {
    run_git(runner, dir, &["checkout", reference])
}
