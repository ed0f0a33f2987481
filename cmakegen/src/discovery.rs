//! Recursive file discovery below a scan root.

use crate::error::{CmakegenError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` recursively and return every regular file found.
///
/// Entries are visited sorted by file name within each directory, so the
/// returned order is stable for an unchanged tree regardless of how the host
/// filesystem enumerates directories. A relative root is resolved against the
/// current directory first, so returned paths are always absolute.
///
/// Symbolic links to files are returned like regular files. Symbolic links to
/// directories are not descended into.
///
/// # Errors
///
/// Returns `Discovery` if the root does not exist or any directory below it
/// cannot be read. The walk stops at the first failure. Returns
/// `CurrentDirectory` if a relative root cannot be resolved.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = absolute_root(root)?;
    let root = root.as_path();
    tracing::debug!("Discovering files under {}", root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            CmakegenError::discovery(path, e)
        })?;

        // Follows file symlinks, unlike `entry.file_type()`.
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Discovered {} files", files.len());
    Ok(files)
}

/// Resolve `root` against the current directory, dropping `.` components.
pub fn absolute_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root).map_err(CmakegenError::CurrentDirectory)
}
