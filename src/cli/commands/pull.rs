//! Pull command implementation
//!
//! Rebases the checked-out branch of every clean directory onto its
//! upstream and lists the commits that came in.

use crate::cli::context::WorkspaceContext;
use crate::cli::dir_iter::{for_each_dir, DirOpSummary, DirVisit};
use crate::cli::output::Output;
use crate::core::workspace::WorkspaceDir;
use crate::git;
use std::io::{self, Write};

/// Run the pull command
pub fn run_pull<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
) -> anyhow::Result<DirOpSummary> {
    let dirs = ctx.dirs()?;
    let summary = for_each_dir(&dirs, |dir| pull_single_dir(ctx, out, dir))?;
    Ok(summary)
}

/// Pull a single directory.
///
/// A dirty working tree is never pulled. Failing to read the pre-pull head
/// abandons the directory; later failures are reported and the remaining
/// steps still run.
fn pull_single_dir<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
    dir: &WorkspaceDir,
) -> io::Result<DirVisit> {
    let status = match git::status_short(ctx.runner, &dir.path) {
        Ok(status) => status,
        Err(e) => {
            out.failure(&format!("{}: {}", dir.name, e))?;
            return Ok(DirVisit::Failed);
        }
    };

    if !status.is_empty() {
        out.warning(&format!(
            "There are modified files in {}.\n{}",
            dir.name, status
        ))?;
        return Ok(DirVisit::Skipped);
    }

    out.callout(&format!("Rebase...{}", dir.name))?;

    let before = match git::head_revision(ctx.runner, &dir.path) {
        Ok(rev) => rev,
        Err(e) => {
            out.failure(&format!("{}: {}", dir.name, e))?;
            return Ok(DirVisit::Failed);
        }
    };

    let mut visit = DirVisit::Done;

    if let Err(e) = git::pull_rebase(ctx.runner, &dir.path) {
        out.failure(&format!("{}: {}", dir.name, e))?;
        visit = DirVisit::Failed;
    }

    match git::commits_since(ctx.runner, &dir.path, &before) {
        Ok(changes) => out.raw(&changes)?,
        Err(e) => {
            out.failure(&format!("{}: {}", dir.name, e))?;
            visit = DirVisit::Failed;
        }
    }

    out.success("OK")?;
    Ok(visit)
}
