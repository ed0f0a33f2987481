//! CLI definition for the cmakegen command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::Parser;

/// cmakegen - Generate CMake source lists from a C/C++ source tree.
///
/// Scans the current directory for .h, .cpp and .c files and writes
/// ../CMakeLists.txt with one header list and one source list per directory,
/// a static library target referencing all of them, and source_group
/// declarations for IDE folder views.
#[derive(Parser, Debug)]
#[command(name = "cmakegen")]
#[command(version)]
#[command(about = "Generate CMake source lists from a C/C++ source tree")]
#[command(
    long_about = "cmakegen scans a directory tree for .h, .cpp and .c files and writes a \
    CMakeLists.txt listing them grouped by directory.\n\n\
    Paths are rebased onto the anchor directory (default Runtime/). A recognized file \
    outside the anchor is an error.\n\n\
    Configuration is read from cmakegen.toml, cmakegen.yaml or cmakegen.json in the scan \
    root, then from the environment, then from flags.\n\n\
    Environment variables:\n  \
    CMAKEGEN_ANCHOR        Anchor token\n  \
    CMAKEGEN_LIBRARY_NAME  Static library target name\n  \
    CMAKEGEN_OUTPUT        Output path\n  \
    CMAKEGEN_DRY_RUN       Print instead of writing"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Directory to scan (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory marker where listed paths begin
    #[arg(long, value_name = "TOKEN")]
    pub anchor: Option<String>,

    /// Name of the generated static library target
    #[arg(long = "library", value_name = "NAME")]
    pub library_name: Option<String>,

    /// Output file, relative paths resolved against the scan root
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the listing to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
