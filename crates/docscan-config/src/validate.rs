//! Configuration validation.
//!
//! Reports non-fatal problems: settings that load fine but cannot have the intended effect.

use std::fmt;

use crate::Config;

/// Extensions docscan has a page parser for.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["md", "markdown", "mdx", "txt"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No extensions are configured, so no page will ever be read.
    NoExtensions,
    /// An extension has no page parser and its files will be ignored.
    UnsupportedExtension {
        /// The extension.
        extension: String,
    },
    /// An extra stopword is too short to ever be a token.
    IneffectiveStopword {
        /// The stopword.
        word: String,
    },
    /// `top_n` is zero, so the top keyword list is always empty.
    ZeroTopN,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExtensions => write!(f, "bundle.extensions is empty; no pages will be read"),
            Self::UnsupportedExtension { extension } => {
                write!(f, "no parser for extension '{extension}'; its files are ignored")
            }
            Self::IneffectiveStopword { word } => {
                write!(
                    f,
                    "stopword '{word}' is shorter than 3 characters and never a token"
                )
            }
            Self::ZeroTopN => write!(f, "keywords.top_n is 0; top keywords will be empty"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.bundle.extensions.is_empty() {
        warnings.push(ConfigWarning::NoExtensions);
    }
    for extension in &config.bundle.extensions {
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            warnings.push(ConfigWarning::UnsupportedExtension {
                extension: extension.clone(),
            });
        }
    }

    for word in &config.keywords.extra_stopwords {
        if word.chars().count() <= 2 {
            warnings.push(ConfigWarning::IneffectiveStopword { word: word.clone() });
        }
    }

    if config.keywords.top_n == 0 {
        warnings.push(ConfigWarning::ZeroTopN);
    }

    warnings
}
