//! Extension filtering and header/implementation classification.

use std::fmt;
use std::path::Path;

/// Extensions classified as headers (lower-case, without the dot).
pub const HEADER_EXTENSIONS: &[&str] = &["h"];

/// Extensions classified as implementation files (lower-case, without the dot).
pub const IMPLEMENTATION_EXTENSIONS: &[&str] = &["cpp", "c"];

/// The kind of a recognized source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A header file, listed under `<dir>_HDRS`.
    Header,
    /// An implementation file, listed under `<dir>_SRCS`.
    Implementation,
}

impl FileKind {
    /// Classify a path by its extension, ignoring case.
    ///
    /// Returns `None` for files outside the recognized extension set.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::from_extension(&ext)
    }

    /// Classify a lower-case extension without its leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if HEADER_EXTENSIONS.contains(&ext) {
            Some(Self::Header)
        } else if IMPLEMENTATION_EXTENSIONS.contains(&ext) {
            Some(Self::Implementation)
        } else {
            None
        }
    }

    /// Suffix appended to a directory tag to name this kind's list.
    pub fn list_suffix(self) -> &'static str {
        match self {
            Self::Header => "_HDRS",
            Self::Implementation => "_SRCS",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Implementation => write!(f, "implementation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_extension() {
        assert_eq!(
            FileKind::from_path(Path::new("Runtime/Core/Foo.h")),
            Some(FileKind::Header)
        );
    }

    #[test]
    fn test_implementation_extensions() {
        assert_eq!(
            FileKind::from_path(Path::new("Foo.cpp")),
            Some(FileKind::Implementation)
        );
        assert_eq!(
            FileKind::from_path(Path::new("Bar.c")),
            Some(FileKind::Implementation)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            FileKind::from_path(Path::new("Foo.H")),
            FileKind::from_path(Path::new("foo.h"))
        );
        assert_eq!(
            FileKind::from_path(Path::new("Main.CPP")),
            Some(FileKind::Implementation)
        );
    }

    #[test]
    fn test_unrecognized_extensions_dropped() {
        for name in ["README.md", "notes.txt", "CMakeSetup.py", "Foo.hpp", "Makefile"] {
            assert_eq!(FileKind::from_path(Path::new(name)), None, "{name}");
        }
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(FileKind::from_path(Path::new("Foo.h.bak")), None);
        assert_eq!(
            FileKind::from_path(Path::new("Foo.inl.h")),
            Some(FileKind::Header)
        );
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(FileKind::from_path(Path::new("Runtime/.h")), None);
    }

    #[test]
    fn test_list_suffix() {
        assert_eq!(FileKind::Header.list_suffix(), "_HDRS");
        assert_eq!(FileKind::Implementation.list_suffix(), "_SRCS");
    }
}
