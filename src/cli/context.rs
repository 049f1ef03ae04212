//! Workspace context passed to command handlers

use crate::core::workspace::{Workspace, WorkspaceDir, WorkspaceError};
use crate::util::cmd::CommandRunner;
use std::path::Path;

/// Workspace context available to all command handlers.
///
/// Created once in `main()` after reading the environment, then passed by
/// reference to every command.
pub struct WorkspaceContext<'r> {
    pub workspace: Workspace,
    /// Executes every external command
    pub runner: &'r dyn CommandRunner,
}

impl<'r> WorkspaceContext<'r> {
    pub fn new(workspace: Workspace, runner: &'r dyn CommandRunner) -> Self {
        Self { workspace, runner }
    }

    /// Get workspace root as a `&Path`
    pub fn root(&self) -> &Path {
        self.workspace.root()
    }

    /// Fresh listing of the workspace's child directories
    pub fn dirs(&self) -> Result<Vec<WorkspaceDir>, WorkspaceError> {
        self.workspace.list_dirs()
    }
}
