//! Core workspace model

pub mod workspace;

pub use workspace::{Workspace, WorkspaceDir, WorkspaceError, WORKSPACE_ENV};
