//! Documentation bundle discovery and analysis for docscan.
//!
//! A bundle is a documentation root with a pages directory of markdown and text files.
//! This crate finds the pages, parses them, and runs the keyword pipeline and the structural
//! analyses over them.
//!
//! Only regular files directly inside the pages directory are pages. Hidden files
//! (`.draft.md`), symlinks and subdirectories are left out even when their extension
//! matches, so a bundle is exactly the set of files a cache wrote there. Each such entry
//! is logged at debug level.

#![warn(missing_docs)]

mod bundle;
mod discovery;
mod error;
mod summary;

use std::path::Path;

pub use bundle::{Bundle, SkippedPage};
pub use discovery::{PageFile, discover_pages, pages_dir};
use docscan_config::{ApiSettings, Config, KeywordSettings};
use docscan_document::ApiDetector;
use docscan_keywords::{KeywordExtractor, KeywordReport, Stopwords, Weights};
pub use error::BundleError;
pub use summary::{
    BundleSummary, CategoryCount, CodeStats, DocumentSummary, LanguageCount, PageExample,
    PageTopics,
};
use tracing::info;

/// Builds a keyword extractor from configured settings.
pub fn keyword_extractor(settings: &KeywordSettings) -> KeywordExtractor {
    let mut stopwords = Stopwords::new().with_extra(&settings.extra_stopwords);
    if settings.iso_stopwords {
        stopwords = stopwords.with_iso_english();
    }
    KeywordExtractor::new(stopwords)
        .with_weights(Weights {
            heading: settings.heading_weight,
            body: settings.body_weight,
        })
        .with_top_n(settings.top_n)
}

/// Builds an API detector from configured settings.
pub fn api_detector(settings: &ApiSettings) -> ApiDetector {
    ApiDetector::new(&settings.ignore_receivers)
}

/// Extracts and ranks keywords from the pages of a documentation root.
///
/// Fails without a partial report when the pages directory is missing, or when a page
/// cannot be read under the `abort` policy. An empty pages directory yields an empty report.
pub fn extract_keywords(root: &Path, config: &Config) -> Result<KeywordReport, BundleError> {
    let bundle = Bundle::open(root, &config.bundle)?;
    let report = bundle.keywords(&keyword_extractor(&config.keywords));
    info!(
        root = %root.display(),
        documents = report.total_documents,
        tokens = report.total_tokens,
        unique_terms = report.unique_terms,
        skipped = bundle.skipped.len(),
        "extracted keywords"
    );
    Ok(report)
}

/// Reads a documentation root and runs every analysis over it.
pub fn analyze_bundle(root: &Path, config: &Config) -> Result<BundleSummary, BundleError> {
    let bundle = Bundle::open(root, &config.bundle)?;
    let summary = bundle.summarize(config);
    info!(
        root = %root.display(),
        documents = summary.document_count,
        code_examples = summary.code_stats.total,
        api_methods = summary.api_methods.len(),
        skipped = summary.skipped.len(),
        "analyzed bundle"
    );
    Ok(summary)
}
