//! Discover C/C++ sources in a directory tree and emit CMake source lists.
//!
//! The pipeline is strictly linear:
//!
//! - [`discover_files`] walks the scan root
//! - [`FileKind::from_path`] keeps `.h`, `.cpp` and `.c` files and classifies them
//! - [`normalize_path`] rebases each path onto the anchor token (`Runtime/`)
//! - [`GroupTable`] buckets paths per directory
//! - [`render`] produces `set(...)`, `add_library(...)` and `source_group(...)` text
//!
//! # Example
//!
//! ```no_run
//! use cmakegen::{generate, ConfigOverrides, ConfigProvider};
//!
//! let root = std::env::current_dir()?;
//! let config = ConfigProvider::new(&root).load(&ConfigOverrides::default())?;
//! let summary = generate(&root, &config)?;
//! println!("{} directories", summary.directories);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod classify;
mod config;
mod discovery;
mod emit;
mod error;
mod group;
mod normalize;

pub use classify::{FileKind, HEADER_EXTENSIONS, IMPLEMENTATION_EXTENSIONS};
pub use config::{
    ConfigOverrides, ConfigProvider, GeneratorConfig, CONFIG_FILE_NAMES, DEFAULT_OUTPUT,
    ENV_PREFIX,
};
pub use discovery::{absolute_root, discover_files};
pub use emit::{group_label, list_name, render, write_output, DEFAULT_LIBRARY_NAME};
pub use error::{CmakegenError, Result};
pub use group::{parent_dir, DirectoryGroup, GroupTable, SourceFile};
pub use normalize::{find_anchor, normalize_path, to_forward_slashes, DEFAULT_ANCHOR};

use std::path::{Path, PathBuf};

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of directory groups emitted.
    pub directories: usize,
    /// Number of header files listed.
    pub headers: usize,
    /// Number of implementation files listed.
    pub implementations: usize,
    /// File written, or `None` for a dry run.
    pub output: Option<PathBuf>,
}

/// Discover, classify and normalize every recognized source file below `root`.
///
/// Unrecognized files are dropped. A recognized file outside the anchor
/// aborts the whole scan.
pub fn collect_sources(root: &Path, anchor: &str) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();
    for path in discover_files(root)? {
        let Some(kind) = FileKind::from_path(&path) else {
            tracing::trace!("Skipping {}", path.display());
            continue;
        };
        sources.push(SourceFile::new(normalize_path(&path, anchor)?, kind));
    }
    tracing::debug!("Collected {} source files", sources.len());
    Ok(sources)
}

/// Build the group table for `root`.
pub fn build_table(root: &Path, anchor: &str) -> Result<GroupTable> {
    Ok(GroupTable::from_files(collect_sources(root, anchor)?))
}

/// Run the pipeline and return the listing without writing it.
pub fn render_listing(root: &Path, config: &GeneratorConfig) -> Result<String> {
    let table = build_table(root, &config.anchor)?;
    Ok(render(&table, &config.library_name))
}

/// Run the full pipeline and write the listing to the configured output.
///
/// With `dry_run` set nothing is written. Use [`render_listing`] to get the text.
pub fn generate(root: &Path, config: &GeneratorConfig) -> Result<GenerationSummary> {
    let table = build_table(root, &config.anchor)?;
    let text = render(&table, &config.library_name);

    let output = if config.dry_run {
        tracing::debug!("Dry run, not writing output");
        None
    } else {
        let path = config.output_path(root);
        write_output(&path, &text)?;
        Some(path)
    };

    Ok(GenerationSummary {
        directories: table.len(),
        headers: table.count(FileKind::Header),
        implementations: table.count(FileKind::Implementation),
        output,
    })
}
