//! Checkout command implementation

use super::heads::report_head;
use crate::cli::context::WorkspaceContext;
use crate::cli::dir_iter::{for_each_dir, DirOpSummary, DirVisit};
use crate::cli::output::Output;
use crate::git;
use std::io::Write;

/// Run the checkout command
pub fn run_checkout<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
    reference: &str,
) -> anyhow::Result<DirOpSummary> {
    let dirs = ctx.dirs()?;

    let summary = for_each_dir(&dirs, |dir| {
        let checked_out = match git::checkout(ctx.runner, &dir.path, reference) {
            Ok(_) => true,
            Err(e) => {
                out.failure(&format!("{}: {}", dir.name, e))?;
                false
            }
        };

        let visit = report_head(ctx, out, dir)?;
        Ok(if checked_out { visit } else { DirVisit::Failed })
    })?;

    Ok(summary)
}
