//! CMake text emission for a [`GroupTable`].
//!
//! The output has three sections, each walking directories in the table's
//! lexicographic order:
//!
//! 1. A `set(<TAG>_HDRS ...)` and `set(<TAG>_SRCS ...)` pair per directory.
//! 2. One `add_library(<name> STATIC ...)` referencing every list.
//! 3. A `source_group(...)` line per directory for IDE folder display.

use crate::classify::FileKind;
use crate::error::{CmakegenError, Result};
use crate::group::{DirectoryGroup, GroupTable};
use std::fs;
use std::path::Path;

/// Default name of the emitted static library target.
pub const DEFAULT_LIBRARY_NAME: &str = "FlyCore";

const INDENT: &str = "    ";

/// Variable name of a directory's list, e.g. `Runtime_Core_HDRS`.
pub fn list_name(dir: &str, kind: FileKind) -> String {
    format!("{}{}", dir.replace('/', "_"), kind.list_suffix())
}

/// `source_group` label for a directory.
///
/// Separators become `\\`, which CMake reads as one literal backslash in an
/// unquoted argument, giving nested folders in IDE project views.
pub fn group_label(dir: &str) -> String {
    dir.replace('/', "\\\\")
}

fn render_set(out: &mut String, dir: &str, group: &DirectoryGroup, kind: FileKind) {
    out.push_str(&format!("set({}\n", list_name(dir, kind)));
    for file in group.files(kind) {
        out.push_str(INDENT);
        out.push_str(file);
        out.push('\n');
    }
    out.push_str(")\n");
}

/// Render the full listing for `table`.
///
/// Both lists are emitted for every directory, even when one is empty.
pub fn render(table: &GroupTable, library_name: &str) -> String {
    let mut out = String::new();

    for (dir, group) in table.iter() {
        render_set(&mut out, dir, group, FileKind::Header);
        render_set(&mut out, dir, group, FileKind::Implementation);
        out.push('\n');
    }

    out.push_str(&format!("add_library({} STATIC\n", library_name));
    for dir in table.directories() {
        out.push_str(&format!(
            "{INDENT}${{{}}}\n",
            list_name(dir, FileKind::Header)
        ));
        out.push_str(&format!(
            "{INDENT}${{{}}}\n",
            list_name(dir, FileKind::Implementation)
        ));
        out.push('\n');
    }
    out.push_str(")\n\n");

    for dir in table.directories() {
        out.push_str(&format!(
            "source_group({} FILES ${{{}}} ${{{}}})\n",
            group_label(dir),
            list_name(dir, FileKind::Header),
            list_name(dir, FileKind::Implementation)
        ));
    }

    out
}

/// Write `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `OutputWrite` if the file cannot be created or written.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| CmakegenError::output_write(path, e))?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::SourceFile;
    use tempfile::TempDir;

    fn sample_table() -> GroupTable {
        GroupTable::from_files([
            SourceFile::new("Runtime/Core/Foo.h", FileKind::Header),
            SourceFile::new("Runtime/Core/Foo.cpp", FileKind::Implementation),
            SourceFile::new("Runtime/IO/Bar.c", FileKind::Implementation),
        ])
    }

    #[test]
    fn test_list_name() {
        assert_eq!(list_name("Runtime/Core", FileKind::Header), "Runtime_Core_HDRS");
        assert_eq!(
            list_name("Runtime", FileKind::Implementation),
            "Runtime_SRCS"
        );
    }

    #[test]
    fn test_group_label() {
        assert_eq!(group_label("Runtime/Core"), r"Runtime\\Core");
        assert_eq!(group_label("Runtime"), "Runtime");
    }

    #[test]
    fn test_render_exact_output() {
        let expected = "\
set(Runtime_Core_HDRS
    Runtime/Core/Foo.h
)
set(Runtime_Core_SRCS
    Runtime/Core/Foo.cpp
)

set(Runtime_IO_HDRS
)
set(Runtime_IO_SRCS
    Runtime/IO/Bar.c
)

add_library(FlyCore STATIC
    ${Runtime_Core_HDRS}
    ${Runtime_Core_SRCS}

    ${Runtime_IO_HDRS}
    ${Runtime_IO_SRCS}

)

source_group(Runtime\\\\Core FILES ${Runtime_Core_HDRS} ${Runtime_Core_SRCS})
source_group(Runtime\\\\IO FILES ${Runtime_IO_HDRS} ${Runtime_IO_SRCS})
";
        assert_eq!(render(&sample_table(), DEFAULT_LIBRARY_NAME), expected);
    }

    #[test]
    fn test_render_custom_library_name() {
        let text = render(&sample_table(), "Engine");
        assert!(text.contains("add_library(Engine STATIC\n"));
        assert!(!text.contains("FlyCore"));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(
            render(&GroupTable::new(), DEFAULT_LIBRARY_NAME),
            "add_library(FlyCore STATIC\n)\n\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = sample_table();
        assert_eq!(
            render(&table, DEFAULT_LIBRARY_NAME),
            render(&table.clone(), DEFAULT_LIBRARY_NAME)
        );
    }

    #[test]
    fn test_write_output_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        write_output(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_output_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("CMakeLists.txt");

        let err = write_output(&path, "x").unwrap_err();
        assert!(matches!(err, CmakegenError::OutputWrite { .. }));
    }
}
