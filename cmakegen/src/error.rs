//! Error types for source discovery and CMake list generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CmakegenError.
pub type Result<T> = std::result::Result<T, CmakegenError>;

/// Errors that can occur while generating a CMake source listing.
///
/// None of these are recovered locally. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum CmakegenError {
    /// The scan root is missing or a directory below it could not be read.
    #[error("failed to scan '{path}': {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    /// A recognized source file does not lie under the anchor token.
    #[error("anchor token '{anchor}' not found in path '{path}'")]
    PathAnchor { path: String, anchor: String },

    /// A recognized source file has a path that is not valid UTF-8.
    #[error("path '{}' is not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },

    /// The generated listing could not be written.
    #[error("failed to write file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration sources could not be merged or extracted.
    #[error("failed to load configuration: {source}")]
    Config {
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration loaded but holds a value the generator cannot use.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CmakegenError {
    /// Create a Discovery error.
    pub fn discovery(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Create a PathAnchor error.
    pub fn path_anchor(path: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self::PathAnchor {
            path: path.into(),
            anchor: anchor.into(),
        }
    }

    /// Create a NonUtf8Path error.
    pub fn non_utf8_path(path: impl Into<PathBuf>) -> Self {
        Self::NonUtf8Path { path: path.into() }
    }

    /// Create an OutputWrite error.
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for CmakegenError {
    fn from(error: figment::Error) -> Self {
        Self::Config {
            source: Box::new(error),
        }
    }
}
