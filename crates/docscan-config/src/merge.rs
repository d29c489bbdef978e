//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single `Config`, applying precedence rules and
//! validating values.

use std::path::{Path, PathBuf};

use crate::{
    ApiSettings, BundleSettings, Config, ConfigError, KeywordSettings, ReadErrorPolicy,
    parse::{RawApiSettings, RawBundleSettings, RawConfig, RawKeywordSettings},
    patterns::compile_glob,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single `Config`.
///
/// Configs are given in precedence order, highest first. Every field takes the value from
/// the highest-precedence file that sets it; lists replace rather than extend.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut keywords = KeywordSettings::default();
    let mut bundle = BundleSettings::default();
    let mut api = ApiSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.keywords {
            apply_raw_keywords(&mut keywords, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.bundle {
            apply_raw_bundle(&mut bundle, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.api {
            apply_raw_api(&mut api, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        keywords,
        bundle,
        api,
        config_root,
    })
}

/// Applies a raw `[keywords]` section.
fn apply_raw_keywords(
    result: &mut KeywordSettings,
    raw: &RawKeywordSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
    if let Some(v) = raw.heading_weight {
        result.heading_weight = positive(v, "keywords.heading_weight", path)?;
    }
    if let Some(v) = raw.body_weight {
        result.body_weight = positive(v, "keywords.body_weight", path)?;
    }
    if let Some(ref v) = raw.extra_stopwords {
        result.extra_stopwords = v.iter().map(|w| w.trim().to_lowercase()).collect();
    }
    if let Some(v) = raw.iso_stopwords {
        result.iso_stopwords = v;
    }
    Ok(())
}

/// Applies a raw `[bundle]` section.
fn apply_raw_bundle(
    result: &mut BundleSettings,
    raw: &RawBundleSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.pages_dir {
        if v.trim().is_empty() {
            return Err(invalid(path, "bundle.pages_dir", "must not be empty"));
        }
        result.pages_dir = v.clone();
    }
    if let Some(ref v) = raw.extensions {
        result.extensions = v
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
    }
    if let Some(ref v) = raw.exclude {
        for pattern in v {
            compile_glob(pattern)?;
        }
        result.exclude = v.clone();
    }
    if let Some(ref v) = raw.on_read_error {
        result.on_read_error = v
            .parse::<ReadErrorPolicy>()
            .map_err(|message| invalid(path, "bundle.on_read_error", &message))?;
    }
    Ok(())
}

/// Applies a raw `[api]` section.
fn apply_raw_api(result: &mut ApiSettings, raw: &RawApiSettings) {
    if let Some(v) = raw.min_occurrences {
        result.min_occurrences = v;
    }
    if let Some(ref v) = raw.ignore_receivers {
        result.ignore_receivers = v.clone();
    }
}

/// Rejects zero.
fn positive(value: usize, key: &str, path: &Path) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(invalid(path, key, "must be at least 1"));
    }
    Ok(value)
}

/// Builds an `InvalidValue` error.
fn invalid(path: &Path, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
