//! CLI output formatting
//!
//! Colored, line-oriented reporting for the per-directory results.

use crate::git::Head;
use colored::Colorize;
use std::io::{self, Stdout, Write};

/// Output helper for consistent CLI formatting.
///
/// Generic over the sink so commands can be rendered into a buffer in tests.
pub struct Output<W: Write> {
    out: W,
}

impl Output<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.green())
    }

    /// Print a failure message
    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.red())
    }

    /// Print a warning message
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.yellow())
    }

    /// Print a highlighted line, e.g. the directory being worked on
    pub fn callout(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.white().bold())
    }

    /// Print text exactly as given
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Print the two-line `<dir>(<branch>)` / `<id> <message>` block.
    pub fn head_status(&mut self, dir: &str, branch: &str, head: &Head) -> io::Result<()> {
        writeln!(
            self.out,
            "{}({})\n{} {}",
            Self::dir_name(dir),
            branch,
            Self::commit_id(&head.id),
            Self::commit_message(&head.message)
        )
    }

    /// Format a directory name consistently
    pub fn dir_name(name: &str) -> String {
        name.white().bold().to_string()
    }

    /// Format an abbreviated commit id consistently
    pub fn commit_id(id: &str) -> String {
        id.yellow().to_string()
    }

    /// Format a commit subject consistently
    pub fn commit_message(message: &str) -> String {
        message.cyan().to_string()
    }
}

#[cfg(test)]
pub(crate) fn rendered(output: Output<Vec<u8>>) -> String {
    String::from_utf8(output.into_inner()).expect("output is utf-8")
}
