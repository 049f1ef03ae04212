//! Heads command implementation
//!
//! Shows the checked-out branch and latest commit of every directory.

use crate::cli::context::WorkspaceContext;
use crate::cli::dir_iter::{for_each_dir, DirOpSummary, DirVisit};
use crate::cli::output::Output;
use crate::core::workspace::WorkspaceDir;
use crate::git;
use std::io::{self, Write};

/// Run the heads command
pub fn run_heads<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
) -> anyhow::Result<DirOpSummary> {
    let dirs = ctx.dirs()?;
    let summary = for_each_dir(&dirs, |dir| report_head(ctx, out, dir))?;
    Ok(summary)
}

/// Print `<dir>(<branch>)` and `<id> <message>` for one directory.
///
/// Lookup failures are reported first and leave the field empty, so the
/// two-line block is always printed.
pub(crate) fn report_head<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
    dir: &WorkspaceDir,
) -> io::Result<DirVisit> {
    let mut visit = DirVisit::Done;

    let head = match git::current_head(ctx.runner, &dir.path) {
        Ok(head) => head,
        Err(e) => {
            out.failure(&format!("{}: {}", dir.name, e))?;
            visit = DirVisit::Failed;
            Default::default()
        }
    };

    let branch = match git::current_branch(ctx.runner, &dir.path) {
        Ok(branch) => branch,
        Err(e) => {
            out.failure(&format!("{}: {}", dir.name, e))?;
            visit = DirVisit::Failed;
            String::new()
        }
    };

    out.head_status(&dir.name, &branch, &head)?;
    Ok(visit)
}
