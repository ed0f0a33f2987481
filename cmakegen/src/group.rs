//! Per-directory grouping of normalized source paths.

use crate::classify::FileKind;
use std::collections::BTreeMap;

/// A recognized source file after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Forward-slash path starting at the anchor (e.g. `Runtime/Core/Foo.h`).
    pub path: String,
    /// Header or implementation.
    pub kind: FileKind,
}

impl SourceFile {
    /// Create a new SourceFile.
    pub fn new(path: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Headers and implementation files of one directory, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryGroup {
    pub headers: Vec<String>,
    pub implementations: Vec<String>,
}

impl DirectoryGroup {
    /// Files of the given kind.
    pub fn files(&self, kind: FileKind) -> &[String] {
        match kind {
            FileKind::Header => &self.headers,
            FileKind::Implementation => &self.implementations,
        }
    }

    fn push(&mut self, path: String, kind: FileKind) {
        match kind {
            FileKind::Header => self.headers.push(path),
            FileKind::Implementation => self.implementations.push(path),
        }
    }
}

/// Containing directory of a forward-slash path.
///
/// Trailing slashes are trimmed so `Runtime/Core/` and `Runtime/Core` share a
/// key. A path with no separator lives in the empty directory.
pub fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir.trim_end_matches('/'),
        None => "",
    }
}

/// Directory groups keyed by normalized directory path.
///
/// Keys iterate in lexicographic order, which fixes the order of every
/// emitted declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    groups: BTreeMap<String, DirectoryGroup>,
}

impl GroupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from source files, preserving their order within each list.
    pub fn from_files(files: impl IntoIterator<Item = SourceFile>) -> Self {
        let mut table = Self::new();
        for file in files {
            table.insert(file.path, file.kind);
        }
        table
    }

    /// Append `path` to its directory's list for `kind`, creating the group
    /// (with both lists) on first use.
    pub fn insert(&mut self, path: impl Into<String>, kind: FileKind) {
        let path = path.into();
        let dir = parent_dir(&path).to_string();
        tracing::trace!("Grouping {} {} under {}", kind, path, dir);
        self.groups.entry(dir).or_default().push(path, kind);
    }

    /// Look up the group for a directory.
    pub fn get(&self, dir: &str) -> Option<&DirectoryGroup> {
        self.groups.get(dir)
    }

    /// Iterate groups in lexicographic directory order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryGroup)> {
        self.groups.iter().map(|(dir, group)| (dir.as_str(), group))
    }

    /// Directory keys in lexicographic order.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of directories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no directory has been recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of files of the given kind across all directories.
    pub fn count(&self, kind: FileKind) -> usize {
        self.groups.values().map(|g| g.files(kind).len()).sum()
    }
}
