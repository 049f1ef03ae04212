//! CLI layer
//!
//! Command handlers and the output/iteration helpers they share.

pub mod commands;
pub mod context;
pub mod dir_iter;
pub mod output;

pub use context::WorkspaceContext;
pub use dir_iter::{for_each_dir, DirOpSummary, DirVisit};
pub use output::Output;
