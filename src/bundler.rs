//! Ruby dependency bundling

use crate::util::cmd::{CmdError, CmdOutput, CommandRunner};
use std::path::Path;

/// Dependency manifest that marks a directory as bundleable
pub const MANIFEST_FILE: &str = "Gemfile";

/// Dependency installer, run with no arguments
pub const BUNDLE: &str = "bundle";

/// Whether `dir` contains a dependency manifest
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).exists()
}

/// Run `bundle` inside `dir`.
pub fn install(runner: &dyn CommandRunner, dir: &Path) -> Result<CmdOutput, CmdError> {
    runner.run(dir, BUNDLE, &[])
}
