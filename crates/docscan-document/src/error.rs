//! Page classification errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before a page is parsed.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No page parser handles this extension.
    #[error("no page parser for {path}")]
    UnsupportedFileType {
        /// The rejected file.
        path: PathBuf,
    },
}
