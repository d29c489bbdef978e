//! The keyword report and its parts.

use serde::Serialize;

use crate::FrequencyMap;

/// A term with its aggregate TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    /// The token.
    pub term: String,
    /// Sum of the term's TF-IDF over all documents.
    pub score: f64,
}

/// A term with its summed weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// The token.
    pub term: String,
    /// Sum of the term's weighted frequency over all documents.
    pub count: usize,
}

/// Tokens and frequencies of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentKeywords {
    /// File name relative to the pages directory.
    pub filename: String,
    /// Heading tokens followed by body tokens.
    pub tokens: Vec<String>,
    /// Weighted frequency of every token.
    pub frequency: FrequencyMap,
    /// Number of tokens taken from headings.
    pub heading_tokens: usize,
    /// Number of tokens taken from the body.
    pub body_tokens: usize,
}

/// Keyword statistics for a whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    /// All terms by descending score.
    pub keywords: Vec<ScoredTerm>,
    /// The first `top_n` entries of `keywords`.
    pub top_keywords: Vec<ScoredTerm>,
    /// All terms by descending summed weight.
    pub most_frequent: Vec<TermCount>,
    /// Documents processed.
    pub total_documents: usize,
    /// Heading plus body tokens over all documents.
    pub total_tokens: usize,
    /// Distinct scored terms.
    pub unique_terms: usize,
    /// Per-document drill-down, in enumeration order.
    pub document_data: Vec<DocumentKeywords>,
}

impl KeywordReport {
    /// Assembles a report from ranked lists and per-document data.
    pub fn assemble(
        keywords: Vec<ScoredTerm>,
        most_frequent: Vec<TermCount>,
        document_data: Vec<DocumentKeywords>,
        top_n: usize,
    ) -> Self {
        let top_keywords = keywords.iter().take(top_n).cloned().collect();
        Self {
            total_documents: document_data.len(),
            total_tokens: document_data
                .iter()
                .map(|d| d.heading_tokens + d.body_tokens)
                .sum(),
            unique_terms: keywords.len(),
            keywords,
            top_keywords,
            most_frequent,
            document_data,
        }
    }

    /// Looks up the score of a term.
    pub fn score(&self, term: &str) -> Option<f64> {
        self.keywords
            .iter()
            .find(|k| k.term == term)
            .map(|k| k.score)
    }

    /// Looks up the summed weight of a term.
    pub fn count(&self, term: &str) -> Option<usize> {
        self.most_frequent
            .iter()
            .find(|k| k.term == term)
            .map(|k| k.count)
    }

    /// Finds a document by file name.
    pub fn document(&self, filename: &str) -> Option<&DocumentKeywords> {
        self.document_data.iter().find(|d| d.filename == filename)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scored(terms: &[(&str, f64)]) -> Vec<ScoredTerm> {
        terms
            .iter()
            .map(|(term, score)| ScoredTerm {
                term: (*term).to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn top_n_is_bounded() {
        let keywords = scored(&[("alpha", 3.0), ("beta", 2.0), ("gamma", 1.0)]);

        let report = KeywordReport::assemble(keywords.clone(), Vec::new(), Vec::new(), 2);
        assert_eq!(report.top_keywords.len(), 2);
        assert_eq!(report.top_keywords[0].term, "alpha");

        let report = KeywordReport::assemble(keywords.clone(), Vec::new(), Vec::new(), 0);
        assert!(report.top_keywords.is_empty());

        let report = KeywordReport::assemble(keywords, Vec::new(), Vec::new(), 500);
        assert_eq!(report.top_keywords.len(), 3);
        assert_eq!(report.unique_terms, 3);
    }

    #[test]
    fn serializes_camel_case() {
        let doc = DocumentKeywords {
            filename: "a.md".into(),
            tokens: vec!["cache".into()],
            frequency: FrequencyMap::from([("cache".to_string(), 3)]),
            heading_tokens: 1,
            body_tokens: 0,
        };
        let report = KeywordReport::assemble(
            scored(&[("cache", 1.0)]),
            vec![TermCount {
                term: "cache".into(),
                count: 3,
            }],
            vec![doc],
            50,
        );
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "keywords",
            "topKeywords",
            "mostFrequent",
            "totalDocuments",
            "totalTokens",
            "uniqueTerms",
            "documentData",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["totalTokens"], 1);
        assert_eq!(json["documentData"][0]["headingTokens"], 1);
        assert_eq!(json["documentData"][0]["frequency"]["cache"], 3);
        assert_eq!(json["mostFrequent"][0]["count"], 3);
    }

    #[test]
    fn default_report_is_empty() {
        let report = KeywordReport::default();
        assert_eq!(report.total_documents, 0);
        assert!(report.keywords.is_empty());
        assert!(report.top_keywords.is_empty());
    }
}
