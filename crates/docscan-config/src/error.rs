//! Errors raised while loading `.docscan.toml` files.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// A configuration problem that stops docscan from running.
///
/// Every variant tied to a file names it, so a bad setting can be traced to the file
/// that introduced it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// The config file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A config file is not valid TOML or has fields of the wrong type.
    #[error("invalid TOML in {path}: {source}")]
    ParseToml {
        /// The config file.
        path: PathBuf,
        /// Parser diagnostics, including line and column.
        source: de::Error,
    },

    /// An `exclude` glob does not compile.
    #[error("bad exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The glob as written.
        pattern: String,
        /// Compilation failure.
        source: globset::Error,
    },

    /// A setting parses but its value is not allowed.
    #[error("{key} in {path}: {message}")]
    InvalidValue {
        /// Config file that set the value.
        path: PathBuf,
        /// Dotted key, e.g. `keywords.heading_weight`.
        key: String,
        /// What is wrong with the value.
        message: String,
    },
}
