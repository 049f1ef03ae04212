//! Workspace discovery
//!
//! The workspace is a plain directory named by `SPITFIRE_WORKSPACE`; every
//! immediate subdirectory is a unit of work for the batch commands.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable holding the workspace root
pub const WORKSPACE_ENV: &str = "SPITFIRE_WORKSPACE";

/// Errors that abort a command before any directory is processed
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("SPITFIRE_WORKSPACE is not set")]
    NotSet,

    #[error("failed to read workspace {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An immediate child directory of the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDir {
    /// Directory name as printed in reports
    pub name: String,
    /// Absolute (or root-relative) path used as the working directory
    pub path: PathBuf,
}

/// The directory whose children the batch commands operate on
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Read the workspace root from `SPITFIRE_WORKSPACE`.
    pub fn from_env() -> Result<Self, WorkspaceError> {
        Self::from_var(std::env::var_os(WORKSPACE_ENV))
    }

    /// Validate a raw environment value. Unset and empty are both rejected.
    pub fn from_var(value: Option<OsString>) -> Result<Self, WorkspaceError> {
        match value {
            Some(root) if !root.is_empty() => Ok(Self::new(root)),
            _ => Err(WorkspaceError::NotSet),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the immediate child directories, sorted by name.
    ///
    /// Regular files are ignored, and so are symlinks (even ones pointing at
    /// directories). Entries that cannot be inspected are logged and skipped.
    pub fn list_dirs(&self) -> Result<Vec<WorkspaceDir>, WorkspaceError> {
        let entries = fs::read_dir(&self.root).map_err(|source| WorkspaceError::Read {
            path: self.root.clone(),
            source,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping entry");
                    continue;
                }
            };
            if is_dir {
                dirs.push(WorkspaceDir {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path(),
                });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(root = %self.root.display(), count = dirs.len(), "listed workspace");
        Ok(dirs)
    }
}
