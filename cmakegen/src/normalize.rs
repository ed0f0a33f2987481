//! Rebasing discovered paths onto the anchor directory.

use crate::error::{CmakegenError, Result};
use std::path::Path;

/// Default anchor token marking where a build-relative path begins.
pub const DEFAULT_ANCHOR: &str = "Runtime/";

/// Convert every backslash to a forward slash.
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Byte offset of the first occurrence of `anchor` in `path`, if any.
pub fn find_anchor(path: &str, anchor: &str) -> Option<usize> {
    path.find(anchor)
}

/// Normalize `path` to forward slashes and truncate it to start at `anchor`.
///
/// Everything before the first occurrence of the anchor is discarded. The
/// anchor itself is matched in forward-slash form, so `Runtime\` and
/// `Runtime/` behave the same.
///
/// # Errors
///
/// Returns `NonUtf8Path` if the path cannot be represented as UTF-8, and
/// `PathAnchor` if the anchor does not occur in the normalized path.
pub fn normalize_path(path: &Path, anchor: &str) -> Result<String> {
    let raw = path
        .to_str()
        .ok_or_else(|| CmakegenError::non_utf8_path(path))?;
    let normalized = to_forward_slashes(raw);
    let anchor = to_forward_slashes(anchor);

    match find_anchor(&normalized, &anchor) {
        Some(offset) => Ok(normalized[offset..].to_string()),
        None => Err(CmakegenError::path_anchor(normalized, anchor)),
    }
}
