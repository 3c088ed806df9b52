//! fsprobe - filesystem boundary-condition conformance harness
//!
//! Probes the underlying OS for its behavior at the edges of the
//! filesystem entry lifecycle: creating, renaming, moving, and removing
//! files and directories with names that are empty, valid, or beyond the
//! per-component length limit, against pre-existing or absent targets.
//!
//! The pieces:
//! - [`namegen`]: random alphanumeric names of an exact length
//! - [`workspace`]: one isolated temp directory per scenario, removed on
//!   every exit path
//! - [`driver`]: executes one operation and captures the outcome
//! - [`classify`]: maps (operation, length band, pre-state) to the
//!   expected outcome and verdicts observed behavior
//! - [`oslimit`]: probes the real per-component name length limit
//! - [`scenario`]: the concrete catalog wiring everything together
//! - [`report`]: aggregated pass/fail/skip results

pub mod classify;
pub mod driver;
pub mod error;
pub mod namegen;
pub mod oslimit;
pub mod report;
pub mod scenario;
pub mod workspace;

pub use classify::{Deviation, Expected, LengthBand, OpKind, PreState, Verdict};
pub use driver::{Driver, ErrorKind, Operation, Outcome};
pub use error::{Error, Result};
pub use report::{Report, ScenarioReport};
pub use scenario::Catalog;
pub use workspace::{EntryKind, Workspace};
