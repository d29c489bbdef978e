//! Exclude pattern compilation and matching.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled exclude patterns, matched against bare file names.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    /// All patterns as one set.
    set: GlobSet,
}

impl ExcludePatterns {
    /// Compiles patterns into a single matcher.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern)?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: String::from("<combined exclude patterns>"),
            source: e,
        })?;
        Ok(Self { set })
    }

    /// Checks whether a file name matches any pattern.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.set.is_match(file_name)
    }

    /// True when there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Compiles a single glob.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
