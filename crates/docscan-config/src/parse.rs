//! Configuration file parsing.
//!
//! Parses individual `.docscan.toml` files into `RawConfig` structures whose fields are
//! all optional, so partial files can be merged.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Keyword extraction section.
    pub keywords: Option<RawKeywordSettings>,
    /// Bundle reading section.
    pub bundle: Option<RawBundleSettings>,
    /// API detection section.
    pub api: Option<RawApiSettings>,
}

/// Raw `[keywords]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKeywordSettings {
    /// Size of the top keyword slice.
    pub top_n: Option<usize>,
    /// Weight of a heading occurrence.
    pub heading_weight: Option<usize>,
    /// Weight of a body occurrence.
    pub body_weight: Option<usize>,
    /// Words rejected in addition to the built-in tables.
    pub extra_stopwords: Option<Vec<String>>,
    /// Whether to also reject the Stopwords ISO English list.
    pub iso_stopwords: Option<bool>,
}

/// Raw `[bundle]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBundleSettings {
    /// Name of the pages subdirectory.
    pub pages_dir: Option<String>,
    /// File extensions to read.
    pub extensions: Option<Vec<String>>,
    /// Glob pattern(s) matched against file names. Accepts a string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
    /// `abort` or `skip`.
    pub on_read_error: Option<String>,
}

/// Raw `[api]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawApiSettings {
    /// Minimum occurrences for a name to be reported.
    pub min_occurrences: Option<usize>,
    /// Receivers whose member calls are ignored.
    pub ignore_receivers: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks whether a config file sets `root = true`.
///
/// Unreadable or malformed files are not roots; their errors surface when loading.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
