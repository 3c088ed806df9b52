//! Outcome classification.
//!
//! Maps (operation, name-length band, pre-existing state) to the
//! outcome the OS is expected to produce, and verdicts an observed
//! [`Outcome`] against that expectation.
//!
//! The length bands are relative to the *probed* per-component limit
//! (see [`crate::oslimit`]), not a hard-coded 255. A name exactly at
//! the probed limit is a documented gray zone: some filesystems accept
//! it, some reserve it, so a mismatch there is reported as
//! [`Verdict::Skip`] rather than a hard failure.

use std::fmt;

use crate::driver::{ErrorKind, Outcome};

/// Classification of a name's character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthBand {
    /// Length 0.
    Empty,
    /// 1 up to and including the probed component limit.
    Valid,
    /// Beyond the probed component limit.
    Oversized,
}

impl LengthBand {
    /// Classify `len` against the probed per-component limit.
    pub fn classify(len: usize, name_max: usize) -> Self {
        if len == 0 {
            LengthBand::Empty
        } else if len <= name_max {
            LengthBand::Valid
        } else {
            LengthBand::Oversized
        }
    }
}

/// Whether the operation's target name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreState {
    Absent,
    Present,
}

/// Kind of operation, for expectation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Create,
    Rename,
    Move,
    Remove,
}

/// The outcome category the policy table predicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Success,
    Failure(ErrorKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Success => write!(f, "success"),
            Expected::Failure(kind) => write!(f, "failure: {kind}"),
        }
    }
}

/// The policy table.
///
/// For rename and move, `band` and `pre` describe the *destination*
/// name. POSIX rename replaces an existing destination, so a
/// valid-length present destination still expects success.
pub fn expected(op: OpKind, band: LengthBand, pre: PreState) -> Expected {
    match band {
        LengthBand::Empty => Expected::Failure(ErrorKind::NotFound),
        LengthBand::Oversized => Expected::Failure(ErrorKind::OsLimit),
        LengthBand::Valid => match (op, pre) {
            (OpKind::Create, PreState::Absent) => Expected::Success,
            (OpKind::Create, PreState::Present) => Expected::Failure(ErrorKind::AlreadyExists),
            (OpKind::Rename | OpKind::Move, _) => Expected::Success,
            (OpKind::Remove, PreState::Present) => Expected::Success,
            (OpKind::Remove, PreState::Absent) => Expected::Failure(ErrorKind::NotFound),
        },
    }
}

/// Scenario verdict.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// Observed outcome matched the expected category.
    Pass,
    /// Observed outcome deviated outside any gray zone.
    Fail { expected: String, observed: String },
    /// Environment-dependent deviation; not verified, not failed.
    Skip { reason: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// How a deviation from the expected category is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deviation {
    /// Hard requirement: any mismatch is a failure. Collision creates
    /// and double removals are pinned - a silent overwrite or a
    /// successful second removal must fail, never skip.
    Pinned,
    /// Name length sits exactly at the probed limit: any mismatch is
    /// environment-dependent.
    Gray,
    /// The table predicts a failure, but an OS permitting the operation
    /// is a known environment quirk: unexpected success skips, a wrong
    /// failure category still fails.
    EnvDependent,
}

/// Compare an observed outcome against the expectation.
///
/// Deviations are reported per the [`Deviation`] policy the scenario
/// declares; skips carry a reason and stay visible in the report
/// instead of silently passing.
pub fn verdict(expected: &Expected, observed: &Outcome, deviation: Deviation) -> Verdict {
    let matched = match (expected, observed) {
        (Expected::Success, Outcome::Success { .. }) => true,
        (Expected::Failure(want), Outcome::Failure(got)) => want == got,
        _ => false,
    };
    if matched {
        return Verdict::Pass;
    }
    let fail = || Verdict::Fail {
        expected: expected.to_string(),
        observed: observed.to_string(),
    };
    match deviation {
        Deviation::Pinned => fail(),
        Deviation::Gray => Verdict::Skip {
            reason: format!(
                "name length at probed limit: expected {expected}, observed {observed}"
            ),
        },
        Deviation::EnvDependent => match (expected, observed) {
            (Expected::Failure(_), Outcome::Success { .. }) => Verdict::Skip {
                reason: format!("filesystem permitted an operation expected to fail: {expected}"),
            },
            _ => fail(),
        },
    }
}
