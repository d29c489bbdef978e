//! Keyword extraction for documentation corpora.
//!
//! The pipeline has four stages, all pure:
//!
//! 1. **Tokenization**: heading and body text are split into lower-case tokens that pass
//!    the acceptance predicate (length, stopwords, shape).
//! 2. **Per-document frequency**: heading occurrences weigh 3, body occurrences weigh 1.
//! 3. **Corpus TF-IDF**: raw token counts scaled by inverse document frequency, summed
//!    over all documents.
//! 4. **Assembly**: TF-IDF ranking, weighted-frequency ranking and per-document data are
//!    combined into a [`KeywordReport`].
//!
//! Input order matters: it defines the first-appearance order used to break ranking ties.

#![warn(missing_docs)]

mod corpus;
mod frequency;
mod report;
mod stopwords;
mod tokenize;

pub use corpus::{CorpusRanking, idf, rank_corpus};
pub use frequency::{
    DEFAULT_BODY_WEIGHT, DEFAULT_HEADING_WEIGHT, FrequencyMap, Weights, document_frequency,
};
pub use report::{DocumentKeywords, KeywordReport, ScoredTerm, TermCount};
pub use stopwords::Stopwords;
pub use tokenize::{is_token, tokenize};
use tracing::debug;

/// Default number of entries in `top_keywords`.
pub const DEFAULT_TOP_N: usize = 50;

/// The text of one document, split into its two buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    /// File name relative to the pages directory.
    pub filename: String,
    /// Space-joined heading text.
    pub heading_text: String,
    /// Space-joined paragraph and list-item text.
    pub body_text: String,
}

impl DocumentText {
    /// Creates a document from its buckets.
    pub fn new(
        filename: impl Into<String>,
        heading_text: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            heading_text: heading_text.into(),
            body_text: body_text.into(),
        }
    }
}

/// Runs the keyword pipeline over a corpus.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Words rejected by the tokenizer.
    stopwords: Stopwords,
    /// Bucket weights for frequency maps.
    weights: Weights,
    /// Size of the top keyword slice.
    top_n: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Stopwords::new())
    }
}

impl KeywordExtractor {
    /// Creates an extractor with default weights and cutoff.
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            weights: Weights::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Sets the bucket weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the top keyword cutoff. Zero yields an empty slice.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Returns the configured cutoff.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Tokenizes one document and builds its frequency map.
    pub fn analyze_document(&self, document: &DocumentText) -> DocumentKeywords {
        let heading = tokenize(&document.heading_text, &self.stopwords);
        let body = tokenize(&document.body_text, &self.stopwords);
        let frequency = document_frequency(&heading, &body, self.weights);
        debug!(
            file = %document.filename,
            heading_tokens = heading.len(),
            body_tokens = body.len(),
            "tokenized document"
        );

        DocumentKeywords {
            filename: document.filename.clone(),
            heading_tokens: heading.len(),
            body_tokens: body.len(),
            tokens: heading.into_iter().chain(body).collect(),
            frequency,
        }
    }

    /// Builds the keyword report for documents in enumeration order.
    pub fn extract(&self, documents: &[DocumentText]) -> KeywordReport {
        let data: Vec<DocumentKeywords> = documents
            .iter()
            .map(|doc| self.analyze_document(doc))
            .collect();
        self.assemble(data)
    }

    /// Ranks already analyzed documents and assembles the report.
    pub fn assemble(&self, documents: Vec<DocumentKeywords>) -> KeywordReport {
        let ranking = rank_corpus(&documents);
        debug!(
            documents = documents.len(),
            unique_terms = ranking.keywords.len(),
            "ranked corpus"
        );
        KeywordReport::assemble(ranking.keywords, ranking.most_frequent, documents, self.top_n)
    }
}
