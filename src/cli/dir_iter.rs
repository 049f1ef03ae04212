//! Directory iteration helpers
//!
//! Every batch command walks the workspace the same way: one directory at a
//! time, never stopping early because a single directory failed.

use crate::core::workspace::WorkspaceDir;
use std::io;

/// Outcome of visiting a single directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirVisit {
    /// All steps ran
    Done,
    /// Nothing to do, or deliberately left alone
    Skipped,
    /// At least one step failed; the failure has already been reported
    Failed,
}

/// Summary of a batch directory operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirOpSummary {
    pub done_count: usize,
    pub skip_count: usize,
    pub error_count: usize,
}

impl DirOpSummary {
    pub fn total(&self) -> usize {
        self.done_count + self.skip_count + self.error_count
    }
}

/// Visit every directory in order and tally the outcomes.
///
/// Only an I/O error from `op` (i.e. stdout went away) stops the walk.
pub fn for_each_dir<F>(dirs: &[WorkspaceDir], mut op: F) -> io::Result<DirOpSummary>
where
    F: FnMut(&WorkspaceDir) -> io::Result<DirVisit>,
{
    let mut summary = DirOpSummary::default();

    for dir in dirs {
        match op(dir)? {
            DirVisit::Done => summary.done_count += 1,
            DirVisit::Skipped => summary.skip_count += 1,
            DirVisit::Failed => summary.error_count += 1,
        }
    }

    Ok(summary)
}
