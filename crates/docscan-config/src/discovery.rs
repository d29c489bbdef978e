//! Configuration file discovery.
//!
//! Discovers `.docscan.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.docscan.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".docscan.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global last. A file with
/// `root = true` ends the walk and suppresses the global file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.docscan.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    fn local(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn discover_no_configs() {
        let dir = TestDir::new();
        let subdir = dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn discover_precedence_order() {
        let dir = TestDir::new();
        let top = dir.create_config("", "# top\n");
        let mid = dir.create_config("a/b", "# mid\n");
        let leaf = dir.create_config("a/b/c/d", "# leaf\n");
        let cwd = dir.create_dir("a/b/c/d/e");

        let configs = discover_config_files(&cwd);
        assert_eq!(local(&configs), vec![&leaf, &mid, &top]);
    }

    #[test]
    fn discover_skips_directory_named_like_config() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn root_config_stops_discovery() {
        let dir = TestDir::new();
        dir.create_config("", "# ignored\n");
        let root = dir.create_config("project", "root = true\n");
        let child = dir.create_config("project/sub", "# child\n");
        let cwd = dir.create_dir("project/sub/deep");

        let configs = discover_config_files(&cwd);
        assert_eq!(configs, vec![child, root]);
    }

    #[test]
    fn root_false_does_not_stop_discovery() {
        let dir = TestDir::new();
        let top = dir.create_config("", "# top\n");
        let mid = dir.create_config("project", "root = false\n");
        let cwd = dir.create_dir("project/src");

        let configs = discover_config_files(&cwd);
        assert_eq!(local(&configs), vec![&mid, &top]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/elsewhere/.docscan.toml")));
    }
}
