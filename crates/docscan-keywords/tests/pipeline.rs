#![allow(clippy::tests_outside_test_module)]
//! End-to-end tests of the keyword pipeline on in-memory documents.

use docscan_keywords::{DocumentText, KeywordExtractor, Stopwords, Weights, idf};

const EPSILON: f64 = 1e-9;

fn extractor() -> KeywordExtractor {
    KeywordExtractor::default()
}

#[test]
fn server_actions_scenario() {
    let docs = [DocumentText::new(
        "a.md",
        "Server Actions",
        "Server actions allow you to perform operations.",
    )];
    let report = extractor().extract(&docs);

    let doc = report.document("a.md").unwrap();
    assert_eq!(doc.heading_tokens, 2);
    assert_eq!(doc.body_tokens, 4);
    assert_eq!(
        doc.tokens,
        vec!["server", "actions", "server", "actions", "perform", "operations"]
    );
    assert_eq!(doc.frequency["server"], 4);
    assert_eq!(doc.frequency["actions"], 4);
    for excluded in ["you", "to", "allow"] {
        assert!(!doc.frequency.contains_key(excluded));
    }

    assert_eq!(report.total_documents, 1);
    assert_eq!(report.total_tokens, 6);
    assert_eq!(report.unique_terms, 4);
    assert_eq!(report.count("server"), Some(4));
}

#[test]
fn stopword_only_document_has_no_tokens() {
    let docs = [DocumentText::new(
        "noise.md",
        "The Example",
        "You can use this code with the function parameter.",
    )];
    let report = extractor().extract(&docs);
    let doc = &report.document_data[0];
    assert!(doc.tokens.is_empty());
    assert!(doc.frequency.is_empty());
    assert_eq!(report.total_documents, 1);
    assert!(report.keywords.is_empty());
}

#[test]
fn heading_once_body_twice_weighs_five() {
    let docs = [DocumentText::new(
        "a.md",
        "Middleware",
        "Middleware runs first. Configure middleware per route.",
    )];
    let report = extractor().extract(&docs);
    assert_eq!(report.document_data[0].frequency["middleware"], 5);
}

#[test]
fn zero_documents_is_an_empty_report() {
    let report = extractor().extract(&[]);
    assert_eq!(report.total_documents, 0);
    assert_eq!(report.total_tokens, 0);
    assert_eq!(report.unique_terms, 0);
    assert!(report.keywords.is_empty());
    assert!(report.top_keywords.is_empty());
    assert!(report.most_frequent.is_empty());
    assert!(report.document_data.is_empty());
}

#[test]
fn top_n_is_min_of_cutoff_and_unique_terms() {
    let docs = [
        DocumentText::new("a.md", "Routing", "Layouts nest segments inside folders."),
        DocumentText::new("b.md", "Caching", "Revalidate cached segments on demand."),
    ];
    for top_n in [0, 1, 3, 50] {
        let report = extractor().with_top_n(top_n).extract(&docs);
        assert_eq!(report.top_keywords.len(), top_n.min(report.unique_terms));
        assert_eq!(
            report.top_keywords[..],
            report.keywords[..report.top_keywords.len()]
        );
    }
}

#[test]
fn hooks_scenario() {
    let docs = [
        DocumentText::new("a.md", "", "hooks hooks hooks hooks hooks react"),
        DocumentText::new("b.md", "", "react components"),
    ];
    let report = extractor().extract(&docs);

    assert_eq!(report.count("hooks"), Some(5));
    assert_eq!(report.most_frequent[0].term, "hooks");

    let hooks = report.score("hooks").unwrap();
    let react = report.score("react").unwrap();
    assert!((hooks - 5.0 * idf(2, 1)).abs() < EPSILON);
    assert!((react - 2.0 * idf(2, 2)).abs() < EPSILON);
    assert!(idf(2, 1) > idf(2, 2));
    assert_eq!(report.keywords[0].term, "hooks");
}

#[test]
fn runs_are_idempotent() {
    let docs = [
        DocumentText::new("a.md", "Data Fetching", "Fetch data on the server with caching."),
        DocumentText::new("b.md", "Streaming", "Stream server components progressively."),
        DocumentText::new("c.txt", "", "Plain notes about streaming and caching."),
    ];
    let first = extractor().extract(&docs);
    let second = extractor().extract(&docs);
    assert_eq!(first, second);
}

#[test]
fn keywords_are_sorted_descending() {
    let docs = [
        DocumentText::new("a.md", "Images", "Optimize images with responsive sizes."),
        DocumentText::new("b.md", "Fonts", "Optimize fonts and images automatically."),
    ];
    let report = extractor().extract(&docs);
    assert!(
        report
            .keywords
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score)
    );
    assert!(
        report
            .most_frequent
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count)
    );
}

#[test]
fn custom_weights_and_stopwords() {
    let docs = [DocumentText::new("a.md", "Vercel Deploy", "Deploy on vercel.")];
    let report = KeywordExtractor::new(Stopwords::new().with_extra(["vercel"]))
        .with_weights(Weights {
            heading: 10,
            body: 2,
        })
        .extract(&docs);
    assert_eq!(report.count("deploy"), Some(12));
    assert_eq!(report.count("vercel"), None);
}
