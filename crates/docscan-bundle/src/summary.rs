//! Bundle-level summaries of pages, topics, code examples and API names.

use std::{collections::BTreeMap, path::PathBuf};

use docscan_document::{ApiMethod, CodeCategory, CodeExample, TopicNode};
use docscan_keywords::KeywordReport;
use serde::Serialize;

use crate::SkippedPage;

/// Structural facts about one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// File name of the page.
    pub filename: String,
    /// Source URL from the frontmatter.
    pub url: Option<String>,
    /// Page title.
    pub title: String,
    /// Number of headings.
    pub heading_count: usize,
    /// Number of code examples.
    pub code_example_count: usize,
}

/// The topic forest of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTopics {
    /// File name of the page.
    pub filename: String,
    /// Page title.
    pub title: String,
    /// Root topics.
    pub topics: Vec<TopicNode>,
}

/// A code example together with the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageExample {
    /// File name of the page.
    pub filename: String,
    /// The example.
    #[serde(flatten)]
    pub example: CodeExample,
}

/// Number of examples in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The category.
    pub category: CodeCategory,
    /// Examples in it.
    pub count: usize,
}

/// Number of examples tagged with a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    /// Fence language.
    pub language: String,
    /// Examples tagged with it.
    pub count: usize,
}

/// Totals over all code examples of a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeStats {
    /// Number of examples.
    pub total: usize,
    /// Non-empty categories, most examples first.
    pub by_category: Vec<CategoryCount>,
    /// Languages, most examples first, then by name. Unlabeled blocks are not listed.
    pub by_language: Vec<LanguageCount>,
}

impl CodeStats {
    /// Tallies examples.
    pub fn from_examples<'a>(examples: impl IntoIterator<Item = &'a CodeExample>) -> Self {
        let mut total = 0;
        let mut categories: BTreeMap<CodeCategory, usize> = BTreeMap::new();
        let mut languages: BTreeMap<&str, usize> = BTreeMap::new();

        for example in examples {
            total += 1;
            *categories.entry(example.category).or_insert(0) += 1;
            if let Some(language) = example.language.as_deref() {
                *languages.entry(language).or_insert(0) += 1;
            }
        }

        let mut by_category: Vec<CategoryCount> = categories
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        by_category.sort_by(|a, b| b.count.cmp(&a.count));

        let mut by_language: Vec<LanguageCount> = languages
            .into_iter()
            .map(|(language, count)| LanguageCount {
                language: language.to_string(),
                count,
            })
            .collect();
        by_language.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            total,
            by_category,
            by_language,
        }
    }
}

/// Everything docscan knows about a bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSummary {
    /// Documentation root.
    pub root: PathBuf,
    /// Number of parsed pages.
    pub document_count: usize,
    /// Pages left out by the `skip` policy.
    pub skipped: Vec<SkippedPage>,
    /// Per-page facts, in file name order.
    pub documents: Vec<DocumentSummary>,
    /// Per-page topic forests.
    pub topics: Vec<PageTopics>,
    /// Code example totals.
    pub code_stats: CodeStats,
    /// All code examples.
    pub code_examples: Vec<PageExample>,
    /// Detected API names, most frequent first.
    pub api_methods: Vec<ApiMethod>,
    /// Keyword statistics.
    pub keywords: KeywordReport,
}

#[cfg(test)]
mod test {
    use super::*;

    fn example(language: Option<&str>, category: CodeCategory) -> CodeExample {
        CodeExample {
            language: language.map(str::to_string),
            category,
            code: String::new(),
            line_count: 0,
            context: None,
        }
    }

    #[test]
    fn code_stats_sorted_by_count_then_name() {
        let examples = [
            example(Some("ts"), CodeCategory::Program),
            example(Some("bash"), CodeCategory::Shell),
            example(Some("ts"), CodeCategory::Program),
            example(Some("json"), CodeCategory::Configuration),
            example(None, CodeCategory::Unlabeled),
        ];
        let stats = CodeStats::from_examples(&examples);
        assert_eq!(stats.total, 5);

        let languages: Vec<(&str, usize)> = stats
            .by_language
            .iter()
            .map(|l| (l.language.as_str(), l.count))
            .collect();
        assert_eq!(languages, vec![("ts", 2), ("bash", 1), ("json", 1)]);

        assert_eq!(stats.by_category[0].category, CodeCategory::Program);
        assert_eq!(stats.by_category[0].count, 2);
        assert_eq!(stats.by_category.len(), 4);
    }

    #[test]
    fn empty_stats() {
        let none: Vec<CodeExample> = Vec::new();
        assert_eq!(CodeStats::from_examples(&none), CodeStats::default());
    }
}
