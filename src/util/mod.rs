//! Utility functions and helpers

pub mod cmd;
#[cfg(test)]
pub(crate) mod testing;

pub use cmd::{command_line, log_cmd, CmdError, CmdOutput, CommandRunner, SystemRunner};
