//! Page discovery.
//!
//! Lists the files directly inside a bundle's pages directory, in byte-wise file name
//! order. That order is the document order for everything downstream, including ranking
//! tie-breaks. Subdirectories, symlinks, hidden files, files without a configured
//! extension and excluded names are ignored.

use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};

use docscan_config::{BundleSettings, ExcludePatterns, ReadErrorPolicy};
use docscan_document::PageKind;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::BundleError;

/// A page file found in the pages directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// File name, the document's identity.
    pub filename: String,
    /// Absolute or root-relative path to the file.
    pub path: PathBuf,
    /// Parser to use.
    pub kind: PageKind,
}

/// Resolves and checks the pages directory of a documentation root.
pub fn pages_dir(root: &Path, settings: &BundleSettings) -> Result<PathBuf, BundleError> {
    let pages = root.join(&settings.pages_dir);
    if !pages.exists() {
        return Err(BundleError::MissingPages { path: pages });
    }
    if !pages.is_dir() {
        return Err(BundleError::NotADirectory { path: pages });
    }
    Ok(pages)
}

/// Lists the page files of a pages directory in file name order.
///
/// Listing failures follow the read error policy: `abort` returns the error, `skip` logs
/// it and carries on with the entries that could be listed.
pub fn discover_pages(
    pages: &Path,
    settings: &BundleSettings,
    exclude: &ExcludePatterns,
) -> Result<Vec<PageFile>, BundleError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(pages)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().unwrap_or(pages).to_path_buf();
                match settings.on_read_error {
                    ReadErrorPolicy::Abort => {
                        return Err(BundleError::ReadDir {
                            path,
                            source: io::Error::from(err),
                        });
                    }
                    ReadErrorPolicy::Skip => {
                        warn!(path = %path.display(), error = %err, "skipping unlistable entry");
                        continue;
                    }
                }
            }
        };

        // Skips directories, symlinks and special files.
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if is_hidden(entry.file_name()) {
            debug!(file = filename, "skipping hidden file");
            continue;
        }
        if !settings.has_extension(filename) {
            continue;
        }
        if exclude.is_excluded(filename) {
            debug!(file = filename, "excluded by pattern");
            continue;
        }
        let Ok(kind) = PageKind::from_path(entry.path()) else {
            debug!(file = filename, "no parser for extension");
            continue;
        };

        files.push(PageFile {
            filename: filename.to_string(),
            path: entry.path().to_path_buf(),
            kind,
        });
    }

    Ok(files)
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
