//! Working tree status

use super::{run_git, GitError};
use crate::util::cmd::CommandRunner;
use std::path::Path;

/// `git status -s`, verbatim.
///
/// Empty output means the working tree is clean.
pub fn status_short(runner: &dyn CommandRunner, dir: &Path) -> Result<String, GitError> {
    run_git(runner, dir, &["status", "-s"])
}
