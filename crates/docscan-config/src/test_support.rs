//! Fixture directories for config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree that config files can be dropped into.
pub struct TestDir {
    /// Removed on drop.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) under the root.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Drops a `.docscan.toml` with `content` into `rel_dir`, returning its path.
    pub fn create_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let file = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&file, content).unwrap();
        file
    }
}
