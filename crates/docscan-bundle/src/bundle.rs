//! Reading a documentation bundle into parsed pages.

use std::{
    fs,
    path::{Path, PathBuf},
};

use docscan_config::{BundleSettings, Config, ReadErrorPolicy};
use docscan_document::{ApiDetector, ApiMethod, ApiTally, Page};
use docscan_keywords::{DocumentText, KeywordExtractor, KeywordReport};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    BundleError, BundleSummary, CodeStats, DocumentSummary, PageExample, PageTopics,
    api_detector, discover_pages, keyword_extractor, pages_dir,
};

/// A page left out under the `skip` read policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPage {
    /// File name of the page.
    pub filename: String,
    /// Why it was skipped.
    pub reason: String,
}

/// All readable pages of a documentation root, in file name order.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Documentation root.
    pub root: PathBuf,
    /// Parsed pages.
    pub pages: Vec<Page>,
    /// Pages that could not be read.
    pub skipped: Vec<SkippedPage>,
}

impl Bundle {
    /// Opens a documentation root and parses every page.
    ///
    /// Fails before reading anything when the pages directory is missing. With the `abort`
    /// policy the first unreadable page fails the whole bundle.
    pub fn open(root: &Path, settings: &BundleSettings) -> Result<Self, BundleError> {
        let pages = pages_dir(root, settings)?;
        let exclude = settings.compile_exclude()?;
        let files = discover_pages(&pages, settings, &exclude)?;
        debug!(pages = %pages.display(), files = files.len(), "discovered pages");

        let mut bundle = Self {
            root: root.to_path_buf(),
            pages: Vec::with_capacity(files.len()),
            skipped: Vec::new(),
        };

        for file in files {
            match fs::read_to_string(&file.path) {
                Ok(content) => {
                    debug!(file = %file.filename, bytes = content.len(), "read page");
                    bundle
                        .pages
                        .push(Page::parse(file.filename, file.kind, &content));
                }
                Err(source) => match settings.on_read_error {
                    ReadErrorPolicy::Abort => {
                        return Err(BundleError::ReadFile {
                            path: file.path,
                            source,
                        });
                    }
                    ReadErrorPolicy::Skip => {
                        warn!(file = %file.filename, error = %source, "skipping unreadable page");
                        bundle.skipped.push(SkippedPage {
                            filename: file.filename,
                            reason: source.to_string(),
                        });
                    }
                },
            }
        }

        Ok(bundle)
    }

    /// Number of parsed pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no page was parsed.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Per-page structural facts.
    pub fn documents(&self) -> Vec<DocumentSummary> {
        self.pages
            .iter()
            .map(|page| DocumentSummary {
                filename: page.filename.clone(),
                url: page.url().map(str::to_string),
                title: page.title(),
                heading_count: page.heading_count(),
                code_example_count: page.code_examples().len(),
            })
            .collect()
    }

    /// Topic forests of every page.
    pub fn topics(&self) -> Vec<PageTopics> {
        self.pages
            .iter()
            .map(|page| PageTopics {
                filename: page.filename.clone(),
                title: page.title(),
                topics: page.topics(),
            })
            .collect()
    }

    /// Code examples of every page, in document order.
    pub fn code_examples(&self) -> Vec<PageExample> {
        self.pages
            .iter()
            .flat_map(|page| {
                page.code_examples()
                    .into_iter()
                    .map(|example| PageExample {
                        filename: page.filename.clone(),
                        example,
                    })
            })
            .collect()
    }

    /// API names found in the code examples of every page.
    pub fn api_methods(&self, detector: &ApiDetector, min_occurrences: usize) -> Vec<ApiMethod> {
        let mut tally = ApiTally::new();
        for page in &self.pages {
            for example in page.code_examples() {
                tally.record(&page.filename, detector.detect(&example.code));
            }
        }
        tally.into_ranked(min_occurrences)
    }

    /// Heading and body text of every page, in page order.
    pub fn document_texts(&self) -> Vec<DocumentText> {
        self.pages
            .iter()
            .map(|page| {
                let buckets = page.text_buckets();
                DocumentText::new(page.filename.clone(), buckets.heading_text, buckets.body_text)
            })
            .collect()
    }

    /// Runs the keyword pipeline over the bundle.
    pub fn keywords(&self, extractor: &KeywordExtractor) -> KeywordReport {
        extractor.extract(&self.document_texts())
    }

    /// Runs every analysis over the bundle.
    pub fn summarize(&self, config: &Config) -> BundleSummary {
        let examples = self.code_examples();
        let code_stats = CodeStats::from_examples(examples.iter().map(|e| &e.example));
        let detector = api_detector(&config.api);

        BundleSummary {
            root: self.root.clone(),
            document_count: self.len(),
            skipped: self.skipped.clone(),
            documents: self.documents(),
            topics: self.topics(),
            code_stats,
            code_examples: examples,
            api_methods: self.api_methods(&detector, config.api.min_occurrences),
            keywords: self.keywords(&keyword_extractor(&config.keywords)),
        }
    }
}
