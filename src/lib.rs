//! gobot - workspace batch runner
//!
//! Runs a fixed set of external-command recipes (bundle, pull, heads,
//! checkout) against every immediate subdirectory of a workspace.

pub mod bundler;
pub mod cli;
pub mod core;
pub mod git;
pub mod util;

pub use crate::core::workspace::{Workspace, WorkspaceError, WORKSPACE_ENV};
pub use crate::util::cmd::{CmdError, CmdOutput, CommandRunner, SystemRunner};
