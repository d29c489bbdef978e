//! Error types for the docscan-bundle crate.

use std::{io, path::PathBuf};

use docscan_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when reading a documentation bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The documentation root has no pages directory.
    #[error("pages directory not found: {path}")]
    MissingPages {
        /// Expected location of the pages directory.
        path: PathBuf,
    },

    /// The pages path exists but is not a directory.
    #[error("pages path is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The pages directory could not be listed.
    #[error("failed to list {path}: {source}")]
    ReadDir {
        /// Directory or entry that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A page could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the page.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Bundle settings could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
