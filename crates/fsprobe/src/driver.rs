//! Operation driver.
//!
//! Executes exactly one filesystem operation against a [`Workspace`]
//! and captures the result as an [`Outcome`]. The error raised by the
//! OS for the operation under test is converted to an [`ErrorKind`]
//! through a fixed mapping and never masked; errors of the harness
//! itself (listing the tree after a successful operation) propagate
//! with `?` instead of being folded into the outcome.
//!
//! All paths are absolute. The driver never touches the process
//! working directory, so scenarios can run in any order without
//! serializing on process-global state.

use std::fmt;
use std::fs;
use std::io;

use crate::error::Result;
use crate::workspace::{EntryKind, Workspace};

/// One filesystem operation under test.
///
/// Names and paths are relative to the workspace root; `Move` accepts
/// multi-component relative paths so an entry can change parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create a new entry.
    Create { kind: EntryKind, name: String },
    /// Rename an entry in place (same parent).
    Rename { from: String, to: String },
    /// Relocate an entry to a different parent.
    Move { from: String, to: String },
    /// Remove an entry.
    Remove { kind: EntryKind, name: String },
}

/// Classified category of an operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target absent where the operation requires presence.
    NotFound,
    /// Target present where the operation requires absence.
    AlreadyExists,
    /// Name or path exceeds an OS-imposed length limit.
    OsLimit,
    /// Uncategorized OS error; always a harness-level failure.
    Other(String),
}

impl ErrorKind {
    /// Fixed mapping from the OS-raised error to the taxonomy.
    pub fn classify(err: &io::Error) -> Self {
        #[cfg(unix)]
        if err.raw_os_error() == Some(libc::ENAMETOOLONG) {
            return ErrorKind::OsLimit;
        }
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::InvalidFilename => ErrorKind::OsLimit,
            kind => ErrorKind::Other(kind.to_string()),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::AlreadyExists => write!(f, "already exists"),
            ErrorKind::OsLimit => write!(f, "os length limit"),
            ErrorKind::Other(detail) => write!(f, "other: {detail}"),
        }
    }
}

/// Result of one operation: success with the workspace root listing,
/// or a classified failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { listing: Vec<String> },
    Failure(ErrorKind),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { listing } => write!(f, "success (listing {listing:?})"),
            Outcome::Failure(kind) => write!(f, "failure: {kind}"),
        }
    }
}

/// Executes operations against one workspace.
pub struct Driver<'ws> {
    ws: &'ws Workspace,
}

impl<'ws> Driver<'ws> {
    pub fn new(ws: &'ws Workspace) -> Self {
        Self { ws }
    }

    /// Execute one operation, single attempt, no retries.
    pub fn apply(&self, op: &Operation) -> Result<Outcome> {
        tracing::debug!(?op, root = %self.ws.root().display(), "applying operation");
        let res = match op {
            Operation::Create { kind, name } => self.create(*kind, name),
            Operation::Rename { from, to } | Operation::Move { from, to } => {
                fs::rename(self.ws.entry_path(from), self.ws.entry_path(to))
            }
            Operation::Remove { kind, name } => self.remove(*kind, name),
        };
        match res {
            Ok(()) => Ok(Outcome::Success {
                listing: self.ws.entries()?,
            }),
            Err(err) => {
                let kind = ErrorKind::classify(&err);
                tracing::debug!(%err, classified = %kind, "operation failed");
                Ok(Outcome::Failure(kind))
            }
        }
    }

    fn create(&self, kind: EntryKind, name: &str) -> io::Result<()> {
        let path = self.ws.entry_path(name);
        match kind {
            EntryKind::Directory => fs::create_dir(&path),
            // create_new: a colliding name must surface AlreadyExists,
            // never silently truncate an existing file.
            EntryKind::File => fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .map(|_| ()),
        }
    }

    fn remove(&self, kind: EntryKind, name: &str) -> io::Result<()> {
        let path = self.ws.entry_path(name);
        match kind {
            EntryKind::Directory => fs::remove_dir(&path),
            EntryKind::File => fs::remove_file(&path),
        }
    }
}
