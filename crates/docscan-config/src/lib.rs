//! Configuration system for docscan.
//!
//! docscan uses TOML configuration files named `.docscan.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.docscan.toml` files found, then loading `~/.docscan.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawApiSettings, RawBundleSettings, RawConfig, RawKeywordSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::ExcludePatterns;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::{ConfigWarning, SUPPORTED_EXTENSIONS};
use validate::validate_config;

/// Top-level merged configuration for docscan.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keyword extraction settings.
    pub keywords: KeywordSettings,
    /// Bundle reading settings.
    pub bundle: BundleSettings,
    /// API detection settings.
    pub api: ApiSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.docscan.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from config file paths in precedence order, highest first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            keywords: self.keywords.clone(),
            bundle: self.bundle.clone(),
            api: self.api.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Size of the top keyword slice.
    pub top_n: usize,
    /// Weight of a heading occurrence.
    pub heading_weight: usize,
    /// Weight of a body occurrence.
    pub body_weight: usize,
    /// Words rejected in addition to the built-in tables.
    pub extra_stopwords: Vec<String>,
    /// Whether to also reject the Stopwords ISO English list.
    pub iso_stopwords: bool,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            top_n: 50,
            heading_weight: 3,
            body_weight: 1,
            extra_stopwords: Vec::new(),
            iso_stopwords: false,
        }
    }
}

/// What to do when a page cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Fail the whole analysis.
    #[default]
    Abort,
    /// Log a warning and leave the page out.
    Skip,
}

impl fmt::Display for ReadErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl str::FromStr for ReadErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("unknown policy '{s}', expected 'abort' or 'skip'")),
        }
    }
}

/// Settings for reading a documentation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Name of the pages subdirectory under the documentation root.
    pub pages_dir: String,
    /// Lower-case file extensions to read, without the dot.
    pub extensions: Vec<String>,
    /// Glob patterns matched against file names.
    pub exclude: Vec<String>,
    /// Behavior on unreadable pages.
    pub on_read_error: ReadErrorPolicy,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            pages_dir: String::from("pages"),
            extensions: vec![String::from("md"), String::from("txt")],
            exclude: Vec::new(),
            on_read_error: ReadErrorPolicy::Abort,
        }
    }
}

impl BundleSettings {
    /// Compiles the exclude patterns.
    pub fn compile_exclude(&self) -> Result<ExcludePatterns, ConfigError> {
        ExcludePatterns::compile(&self.exclude)
    }

    /// Checks whether a file name has one of the configured extensions (case-insensitive).
    pub fn has_extension(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }
}

/// Settings for API method detection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Minimum occurrences for a name to be reported.
    pub min_occurrences: usize,
    /// Receivers whose member calls are ignored.
    pub ignore_receivers: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            min_occurrences: 1,
            ignore_receivers: vec![String::from("console")],
        }
    }
}

/// Serializable view of the effective settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Keyword settings.
    keywords: KeywordSettings,
    /// Bundle settings.
    bundle: BundleSettings,
    /// API settings.
    api: ApiSettings,
}
