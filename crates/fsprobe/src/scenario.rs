//! The scenario catalog.
//!
//! Enumerates the concrete boundary scenarios and wires the name
//! generator, workspace, driver, and classifier together. Every
//! scenario acquires its own [`Workspace`], runs one deterministic
//! attempt of the operation under test, verdicts the outcome, and
//! releases the workspace - scenarios share no state and can run in
//! any order.

use rand::RngExt;

use crate::classify::{self, Deviation, LengthBand, OpKind, PreState, Verdict};
use crate::driver::{Driver, Operation, Outcome};
use crate::error::Result;
use crate::oslimit;
use crate::report::Report;
use crate::workspace::{EntryKind, Workspace};

/// The boundary cases the catalog covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    CreateValid,
    CreateDuplicate,
    CreateEmptyName,
    CreateAtLimit,
    CreateOversized,
    RenameToEmpty,
    RenameToValid,
    RenameToOversized,
    MoveChildDirToRoot,
    RemoveTwice,
}

impl Case {
    fn label(self) -> &'static str {
        match self {
            Case::CreateValid => "create_valid",
            Case::CreateDuplicate => "create_duplicate",
            Case::CreateEmptyName => "create_empty_name",
            Case::CreateAtLimit => "create_at_limit",
            Case::CreateOversized => "create_oversized",
            Case::RenameToEmpty => "rename_to_empty",
            Case::RenameToValid => "rename_to_valid",
            Case::RenameToOversized => "rename_to_oversized",
            Case::MoveChildDirToRoot => "move_child_dir_to_root",
            Case::RemoveTwice => "remove_twice",
        }
    }
}

/// Cases applicable to both files and directories.
const COMMON_CASES: &[Case] = &[
    Case::CreateValid,
    Case::CreateDuplicate,
    Case::CreateEmptyName,
    Case::CreateAtLimit,
    Case::CreateOversized,
    Case::RenameToEmpty,
    Case::RenameToValid,
    Case::RenameToOversized,
    Case::RemoveTwice,
];

/// One runnable scenario: a case applied to an entry kind.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    kind: EntryKind,
    case: Case,
}

impl Scenario {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The full scenario catalog.
pub struct Catalog {
    name_max: usize,
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Build the catalog, probing the component length limit of the
    /// temp area all workspaces live under.
    pub fn new() -> Result<Self> {
        let probe = Workspace::acquire()?;
        let name_max = oslimit::name_max(probe.root());
        probe.release()?;
        tracing::info!(name_max, "probed component length limit");

        let mut scenarios = Vec::new();
        for kind in [EntryKind::File, EntryKind::Directory] {
            let suffix = if kind.is_dir() { "dir" } else { "file" };
            for &case in COMMON_CASES {
                scenarios.push(Scenario {
                    name: format!("{}_{suffix}", case.label()),
                    kind,
                    case,
                });
            }
        }
        scenarios.push(Scenario {
            name: Case::MoveChildDirToRoot.label().to_string(),
            kind: EntryKind::Directory,
            case: Case::MoveChildDirToRoot,
        });

        Ok(Self { name_max, scenarios })
    }

    /// The probed per-component name length limit.
    pub fn name_max(&self) -> usize {
        self.name_max
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Run every scenario sequentially.
    pub fn run(&self) -> Result<Report> {
        self.run_filtered(None)
    }

    /// Run the scenarios whose name contains `filter` (all when None).
    pub fn run_filtered(&self, filter: Option<&str>) -> Result<Report> {
        let mut report = Report::default();
        for scenario in &self.scenarios {
            if let Some(f) = filter {
                if !scenario.name.contains(f) {
                    continue;
                }
            }
            tracing::info!(scenario = %scenario.name, "running");
            let verdict = run_case(scenario.case, scenario.kind, self.name_max)?;
            tracing::info!(scenario = %scenario.name, ?verdict, "finished");
            report.record(scenario.name.clone(), verdict);
        }
        Ok(report)
    }
}

/// A random length strictly inside the valid band, away from the gray
/// boundary at the limit itself.
fn valid_len(name_max: usize) -> usize {
    rand::rng().random_range(1..name_max.max(2))
}

/// A random length in the oversized band, capped at 4096.
fn oversized_len(name_max: usize) -> usize {
    rand::rng().random_range(name_max + 1..=4096.max(name_max + 1))
}

/// Downgrade a Pass when the post-condition listing does not hold.
fn expect_listing(verdict: Verdict, observed: &[String], want: &[String]) -> Verdict {
    if !verdict.is_pass() {
        return verdict;
    }
    if observed != want {
        return Verdict::Fail {
            expected: format!("listing {want:?}"),
            observed: format!("listing {observed:?}"),
        };
    }
    verdict
}

fn run_case(case: Case, kind: EntryKind, name_max: usize) -> Result<Verdict> {
    match case {
        Case::CreateValid => create_valid(kind, name_max),
        Case::CreateDuplicate => create_duplicate(kind, name_max),
        Case::CreateEmptyName => {
            create_with_len(kind, 0, LengthBand::Empty, Deviation::EnvDependent)
        }
        Case::CreateAtLimit => create_with_len(kind, name_max, LengthBand::Valid, Deviation::Gray),
        Case::CreateOversized => create_with_len(
            kind,
            oversized_len(name_max),
            LengthBand::Oversized,
            Deviation::EnvDependent,
        ),
        Case::RenameToEmpty => {
            rename_to_len(kind, name_max, 0, LengthBand::Empty, Deviation::EnvDependent)
        }
        Case::RenameToValid => rename_to_len(
            kind,
            name_max,
            valid_len(name_max),
            LengthBand::Valid,
            Deviation::Pinned,
        ),
        Case::RenameToOversized => rename_to_len(
            kind,
            name_max,
            oversized_len(name_max),
            LengthBand::Oversized,
            Deviation::EnvDependent,
        ),
        Case::MoveChildDirToRoot => move_child_dir_to_root(name_max),
        Case::RemoveTwice => remove_twice(kind, name_max),
    }
}

/// Creating a unique valid-length entry succeeds and the workspace
/// afterwards lists exactly that one name.
fn create_valid(kind: EntryKind, name_max: usize) -> Result<Verdict> {
    let ws = Workspace::acquire()?;
    let name = crate::namegen::generate(valid_len(name_max));
    let outcome = Driver::new(&ws).apply(&Operation::Create {
        kind,
        name: name.clone(),
    })?;
    let expected = classify::expected(OpKind::Create, LengthBand::Valid, PreState::Absent);
    let mut verdict = classify::verdict(&expected, &outcome, Deviation::Pinned);
    if let Outcome::Success { listing } = &outcome {
        verdict = expect_listing(verdict, listing, &[name]);
    }
    ws.release()?;
    Ok(verdict)
}

/// Creating over an existing same-name entry fails with AlreadyExists
/// and leaves the listing untouched.
fn create_duplicate(kind: EntryKind, name_max: usize) -> Result<Verdict> {
    let name = crate::namegen::generate(valid_len(name_max));
    let ws = Workspace::acquire_with_entry(kind, &name)?;
    let outcome = Driver::new(&ws).apply(&Operation::Create {
        kind,
        name: name.clone(),
    })?;
    let expected = classify::expected(OpKind::Create, LengthBand::Valid, PreState::Present);
    let verdict = classify::verdict(&expected, &outcome, Deviation::Pinned);
    let verdict = expect_listing(verdict, &ws.entries()?, &[name]);
    ws.release()?;
    Ok(verdict)
}

/// Create with a name of a fixed length; the band decides what the OS
/// should do, `deviation` how a mismatch is treated.
fn create_with_len(
    kind: EntryKind,
    len: usize,
    band: LengthBand,
    deviation: Deviation,
) -> Result<Verdict> {
    let ws = Workspace::acquire()?;
    let name = crate::namegen::generate(len);
    let outcome = Driver::new(&ws).apply(&Operation::Create { kind, name })?;
    let expected = classify::expected(OpKind::Create, band, PreState::Absent);
    let verdict = classify::verdict(&expected, &outcome, deviation);
    ws.release()?;
    Ok(verdict)
}

/// Rename an existing entry to a destination name of a fixed length.
/// On a rejected rename the original entry must still be listed.
fn rename_to_len(
    kind: EntryKind,
    name_max: usize,
    dest_len: usize,
    band: LengthBand,
    deviation: Deviation,
) -> Result<Verdict> {
    let from = crate::namegen::generate(valid_len(name_max));
    let ws = Workspace::acquire_with_entry(kind, &from)?;
    let to = crate::namegen::generate(dest_len);
    let outcome = Driver::new(&ws).apply(&Operation::Rename {
        from: from.clone(),
        to: to.clone(),
    })?;
    let expected = classify::expected(OpKind::Rename, band, PreState::Absent);
    let mut verdict = classify::verdict(&expected, &outcome, deviation);
    verdict = match &outcome {
        Outcome::Success { listing } => expect_listing(verdict, listing, &[to]),
        Outcome::Failure(_) => expect_listing(verdict, &ws.entries()?, &[from]),
    };
    ws.release()?;
    Ok(verdict)
}

/// Move a child directory out of a nested parent to the workspace
/// root. Afterwards the root lists exactly the old parent and the
/// child, and the old parent is empty.
fn move_child_dir_to_root(name_max: usize) -> Result<Verdict> {
    let parent = crate::namegen::generate(valid_len(name_max));
    let mut child = crate::namegen::generate(valid_len(name_max));
    while child == parent {
        child = crate::namegen::generate(valid_len(name_max));
    }
    let ws = Workspace::acquire_with_entry(EntryKind::Directory, &parent)?;
    let driver = Driver::new(&ws);

    let setup = driver.apply(&Operation::Create {
        kind: EntryKind::Directory,
        name: format!("{parent}/{child}"),
    })?;
    if let Outcome::Failure(kind) = setup {
        return Err(crate::error::Error::Workspace(format!(
            "could not stage child directory: {kind}"
        )));
    }

    let outcome = driver.apply(&Operation::Move {
        from: format!("{parent}/{child}"),
        to: child.clone(),
    })?;
    let expected = classify::expected(OpKind::Move, LengthBand::Valid, PreState::Absent);
    let mut verdict = classify::verdict(&expected, &outcome, Deviation::Pinned);
    if let Outcome::Success { listing } = &outcome {
        let mut want = vec![child.clone(), parent.clone()];
        want.sort();
        verdict = expect_listing(verdict, listing, &want);
        verdict = expect_listing(verdict, &ws.entries_in(&parent)?, &[]);
    }
    ws.release()?;
    Ok(verdict)
}

/// Remove an existing entry, then remove it again. The second attempt
/// must be observable as NotFound - removal is not idempotent.
fn remove_twice(kind: EntryKind, name_max: usize) -> Result<Verdict> {
    let name = crate::namegen::generate(valid_len(name_max));
    let ws = Workspace::acquire_with_entry(kind, &name)?;
    let driver = Driver::new(&ws);

    let first = driver.apply(&Operation::Remove {
        kind,
        name: name.clone(),
    })?;
    let expected = classify::expected(OpKind::Remove, LengthBand::Valid, PreState::Present);
    let mut verdict = classify::verdict(&expected, &first, Deviation::Pinned);
    if let Outcome::Success { listing } = &first {
        verdict = expect_listing(verdict, listing, &[]);
    }
    if !verdict.is_pass() {
        ws.release()?;
        return Ok(verdict);
    }

    let second = driver.apply(&Operation::Remove { kind, name })?;
    // Double removal is pinned: a successful second removal must fail.
    let expected = classify::expected(OpKind::Remove, LengthBand::Valid, PreState::Absent);
    let verdict = classify::verdict(&expected, &second, Deviation::Pinned);
    ws.release()?;
    Ok(verdict)
}
