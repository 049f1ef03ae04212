//! Bundle command implementation
//!
//! Runs `bundle` in every workspace directory that has a Gemfile.

use crate::bundler;
use crate::cli::context::WorkspaceContext;
use crate::cli::dir_iter::{for_each_dir, DirOpSummary, DirVisit};
use crate::cli::output::Output;
use std::io::Write;

/// Run the bundle command
pub fn run_bundle<W: Write>(
    ctx: &WorkspaceContext,
    out: &mut Output<W>,
) -> anyhow::Result<DirOpSummary> {
    let dirs = ctx.dirs()?;

    let summary = for_each_dir(&dirs, |dir| {
        if !bundler::has_manifest(&dir.path) {
            return Ok(DirVisit::Skipped);
        }

        match bundler::install(ctx.runner, &dir.path) {
            Ok(_) => {
                out.success(&format!("Bundled in {}", dir.name))?;
                Ok(DirVisit::Done)
            }
            Err(e) => {
                let detail = e.captured_output().unwrap_or_else(|| e.to_string());
                out.failure(&format!("{} failed to bundle:\n{}", dir.name, detail))?;
                Ok(DirVisit::Failed)
            }
        }
    })?;

    Ok(summary)
}
