//! cmakegen CLI - write CMake source lists for a C/C++ source tree.
//!
//! Run with no arguments inside the source root (e.g. `Source/Runtime`) to
//! write `../CMakeLists.txt`.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmakegen::{
    absolute_root, generate, render_listing, CmakegenError, ConfigOverrides, ConfigProvider,
};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("cmakegen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Collect the flags that were actually given.
fn overrides_from(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        anchor: cli.anchor.clone(),
        library_name: cli.library_name.clone(),
        output: cli.output.clone(),
        dry_run: cli.dry_run.then_some(true),
    }
}

/// Absolute scan root: `--root` resolved against the current directory, or
/// the current directory itself.
fn scan_root(cli: &Cli) -> Result<PathBuf, CmakegenError> {
    match &cli.root {
        Some(root) => absolute_root(root),
        None => std::env::current_dir().map_err(CmakegenError::CurrentDirectory),
    }
}

fn run(cli: Cli) -> Result<(), CmakegenError> {
    let root = scan_root(&cli)?;
    let config = ConfigProvider::new(&root).load(&overrides_from(&cli))?;

    if config.dry_run {
        let text = render_listing(&root, &config)?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .map_err(|e| CmakegenError::output_write("<stdout>", e))?;
        stdout
            .flush()
            .map_err(|e| CmakegenError::output_write("<stdout>", e))?;
        return Ok(());
    }

    let summary = generate(&root, &config)?;
    tracing::info!(
        directories = summary.directories,
        headers = summary.headers,
        sources = summary.implementations,
        "Generated CMake source lists"
    );
    Ok(())
}
