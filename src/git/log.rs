//! Commit log queries

use super::{run_git, GitError};
use crate::util::cmd::CommandRunner;
use std::path::Path;

/// One line of `git log --oneline`: abbreviated id plus subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    pub id: String,
    pub message: String,
}

impl Head {
    /// Split a oneline entry at the first space.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end();
        match line.split_once(' ') {
            Some((id, message)) => Self {
                id: id.to_string(),
                message: message.to_string(),
            },
            None => Self {
                id: line.to_string(),
                message: String::new(),
            },
        }
    }
}

/// The commit at HEAD, read from `git log HEAD~1.. --oneline`.
///
/// Only the first line is used. A repository whose HEAD has no parent makes
/// git fail, which surfaces as an error here.
pub fn current_head(runner: &dyn CommandRunner, dir: &Path) -> Result<Head, GitError> {
    let out = run_git(runner, dir, &["log", "HEAD~1..", "--oneline"])?;
    Ok(Head::parse(out.lines().next().unwrap_or_default()))
}

/// Abbreviated id of HEAD, for use as a `<rev>..` range start.
pub fn head_revision(runner: &dyn CommandRunner, dir: &Path) -> Result<String, GitError> {
    let head = current_head(runner, dir)?;
    if head.id.is_empty() {
        return Err(GitError::NoCommits(dir.display().to_string()));
    }
    Ok(head.id)
}

/// `git log <rev>.. --oneline`, verbatim.
pub fn commits_since(
    runner: &dyn CommandRunner,
    dir: &Path,
    rev: &str,
) -> Result<String, GitError> {
    let range = format!("{}..", rev);
    run_git(runner, dir, &["log", &range, "--oneline"])
}
