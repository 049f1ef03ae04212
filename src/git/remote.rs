//! Remote operations

use super::{run_git, GitError};
use crate::util::cmd::CommandRunner;
use std::path::Path;

/// `git pull --rebase` on whatever branch is checked out.
pub fn pull_rebase(runner: &dyn CommandRunner, dir: &Path) -> Result<(), GitError> {
    run_git(runner, dir, &["pull", "--rebase"]).map(|_| ())
}
