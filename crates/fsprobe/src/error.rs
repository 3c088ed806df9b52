//! Harness-level error types.
//!
//! These cover failures of the harness itself (workspace setup, listing
//! the tree after an operation), not failures of the operation under
//! test - those are captured as [`Outcome::Failure`](crate::Outcome)
//! and classified, never raised.

use thiserror::Error;

/// Result type alias using fsprobe's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Harness error types.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error outside the operation under test.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Workspace could not be set up or torn down.
    #[error("workspace error: {0}")]
    Workspace(String),
}
