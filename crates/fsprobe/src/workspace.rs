//! Isolated per-scenario workspaces.
//!
//! Every scenario owns exactly one [`Workspace`]: a uniquely named
//! directory under the system temp area. The workspace is removed
//! recursively when it goes out of scope - whether the scenario body
//! returned, failed an assertion, or panicked - so no scenario ever
//! observes leftovers from another.

use std::fs;
use std::path::{Path, PathBuf};

use rand::RngExt;

use crate::error::{Error, Result};
use crate::namegen;

/// Kind of a filesystem entry under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// An isolated temp-directory root for one scenario.
///
/// The backing directory is deleted on drop. [`Workspace::release`]
/// deletes it eagerly and surfaces errors; it is a no-op when the
/// scenario body already removed the tree.
#[derive(Debug)]
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    /// Create a fresh, empty workspace.
    pub fn acquire() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("fsprobe-").tempdir()?;
        tracing::debug!(root = %dir.path().display(), "workspace acquired");
        Ok(Self { dir })
    }

    /// Create a workspace pre-populated with one child entry, for
    /// collision and removal scenarios. Files receive short random
    /// content so they are not degenerate zero-byte probes.
    pub fn acquire_with_entry(kind: EntryKind, name: &str) -> Result<Self> {
        let ws = Self::acquire()?;
        let path = ws.root().join(name);
        match kind {
            EntryKind::Directory => fs::create_dir(&path)?,
            EntryKind::File => {
                let len = rand::rng().random_range(1..=100);
                fs::write(&path, namegen::generate(len))?;
            }
        }
        Ok(ws)
    }

    /// Absolute path of the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Whether the root directory still exists.
    pub fn exists(&self) -> bool {
        self.dir.path().exists()
    }

    /// Absolute path for a (relative) entry name.
    ///
    /// An empty name maps to the empty path, not to the root with a
    /// trailing separator: the OS must see the empty name itself so the
    /// observed error is the kernel's, not a path-join artifact.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        if name.is_empty() {
            PathBuf::new()
        } else {
            self.root().join(name)
        }
    }

    /// Sorted names of the entries directly under the root.
    pub fn entries(&self) -> Result<Vec<String>> {
        self.entries_in("")
    }

    /// Sorted names of the entries directly under `rel` (relative to
    /// the root; empty means the root itself).
    pub fn entries_in(&self, rel: &str) -> Result<Vec<String>> {
        let dir = if rel.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Remove the workspace now. No-op if the tree is already gone.
    pub fn release(self) -> Result<()> {
        if self.dir.path().exists() {
            tracing::debug!(root = %self.dir.path().display(), "workspace released");
            self.dir
                .close()
                .map_err(|e| Error::Workspace(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_acquire_creates_empty_root() {
        let ws = Workspace::acquire().expect("acquire");
        assert!(ws.exists());
        assert_eq!(ws.entries().expect("entries"), Vec::<String>::new());
    }

    #[test]
    fn test_workspaces_do_not_share_roots() {
        let a = Workspace::acquire().expect("acquire");
        let b = Workspace::acquire().expect("acquire");
        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn test_release_removes_root() {
        let ws = Workspace::acquire().expect("acquire");
        let root = ws.root().to_path_buf();
        ws.release().expect("release");
        assert!(!root.exists());
    }

    #[test]
    fn test_release_is_noop_when_already_removed() {
        let ws = Workspace::acquire().expect("acquire");
        fs::remove_dir_all(ws.root()).expect("remove");
        ws.release().expect("release after external removal");
    }

    #[test]
    fn test_drop_removes_root() {
        let root = {
            let ws = Workspace::acquire().expect("acquire");
            ws.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[test]
    fn test_acquire_with_directory_entry() {
        let ws = Workspace::acquire_with_entry(EntryKind::Directory, "SEED").expect("acquire");
        assert_eq!(ws.entries().expect("entries"), vec!["SEED".to_string()]);
        assert!(ws.root().join("SEED").is_dir());
    }

    #[test]
    fn test_acquire_with_file_entry_has_content() {
        let ws = Workspace::acquire_with_entry(EntryKind::File, "SEED").expect("acquire");
        let len = fs::metadata(ws.root().join("SEED")).expect("metadata").len();
        assert!((1..=100).contains(&len), "unexpected content length {len}");
    }

    #[test]
    fn test_entry_path_empty_name_is_empty_path() {
        let ws = Workspace::acquire().expect("acquire");
        assert_eq!(ws.entry_path(""), PathBuf::new());
    }
}
