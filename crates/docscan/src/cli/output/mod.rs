//! Rendering and JSON serialization for CLI output.

use std::{fmt::Display, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use docscan_bundle::{CodeStats, DocumentSummary, PageExample, PageTopics};
use docscan_document::{ApiMethod, TopicNode};
pub use docscan_highlight::{Highlighter, dim, header, label, rule, subheader, warning};
use docscan_keywords::{ScoredTerm, TermCount};
use serde::Serialize;

/// Width of separator rules.
const RULE_WIDTH: usize = 60;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reports a fatal error.
pub fn fail(error: &impl Display) -> ExitCode {
    eprintln!("error: {error}");
    ExitCode::FAILURE
}

/// Creates a table with the shared preset.
fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// A right-aligned numeric cell.
fn number(value: impl Display) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Renders ranked keywords with their weighted counts.
pub fn keyword_table(terms: &[ScoredTerm], count: impl Fn(&str) -> Option<usize>) -> Table {
    let mut table = table(vec!["#", "Term", "Score", "Count"]);
    for (rank, term) in terms.iter().enumerate() {
        table.add_row(vec![
            number(rank + 1),
            Cell::new(&term.term),
            number(format!("{:.3}", term.score)),
            number(count(&term.term).unwrap_or_default()),
        ]);
    }
    table
}

/// Renders the most frequent terms.
pub fn frequency_table(terms: &[TermCount]) -> Table {
    let mut table = table(vec!["Term", "Count"]);
    for term in terms {
        table.add_row(vec![Cell::new(&term.term), number(term.count)]);
    }
    table
}

/// Renders detected API names.
pub fn api_table(methods: &[ApiMethod]) -> Table {
    let mut table = table(vec!["Name", "Kind", "Count", "Files"]);
    for method in methods {
        table.add_row(vec![
            Cell::new(&method.name),
            Cell::new(method.kind.to_string()),
            number(method.count),
            Cell::new(method.files.join(", ")),
        ]);
    }
    table
}

/// Renders per-page facts.
pub fn document_table(documents: &[DocumentSummary]) -> Table {
    let mut table = table(vec!["File", "Title", "Headings", "Examples"]);
    for doc in documents {
        table.add_row(vec![
            Cell::new(&doc.filename),
            Cell::new(&doc.title),
            number(doc.heading_count),
            number(doc.code_example_count),
        ]);
    }
    table
}

/// Renders code example totals per category and language.
pub fn code_stats_table(stats: &CodeStats) -> Table {
    let mut table = table(vec!["Category", "Count", "Language", "Count"]);
    let rows = stats.by_category.len().max(stats.by_language.len());
    for i in 0..rows {
        let category = stats.by_category.get(i);
        let language = stats.by_language.get(i);
        table.add_row(vec![
            Cell::new(category.map(|c| c.category.to_string()).unwrap_or_default()),
            category.map_or_else(|| Cell::new(""), |c| number(c.count)),
            Cell::new(language.map(|l| l.language.as_str()).unwrap_or_default()),
            language.map_or_else(|| Cell::new(""), |l| number(l.count)),
        ]);
    }
    table
}

/// Renders a topic forest as an indented outline.
pub fn format_topics(topics: &[TopicNode]) -> String {
    let mut out = String::new();
    for topic in topics {
        push_topic(&mut out, topic, 0);
    }
    out
}

/// Appends one topic and its children at the given depth.
fn push_topic(out: &mut String, topic: &TopicNode, depth: usize) {
    out.push_str(&"  ".repeat(depth + 1));
    out.push_str(&topic.text);
    out.push(' ');
    out.push_str(&dim(&format!("#{}", topic.slug)));
    out.push('\n');
    for child in &topic.children {
        push_topic(out, child, depth + 1);
    }
}

/// Prints the topic outline of every page.
pub fn print_topics(pages: &[PageTopics]) {
    for page in pages {
        println!("{} {}", subheader(&page.title), dim(&page.filename));
        if page.topics.is_empty() {
            println!("  {}", dim("(no headings)"));
        } else {
            print!("{}", format_topics(&page.topics));
        }
        println!();
    }
}

/// Prints code examples with syntax highlighting.
pub fn print_examples(examples: &[PageExample], highlighter: &Highlighter) {
    for item in examples {
        let example = &item.example;
        let mut title = item.filename.clone();
        if let Some(context) = &example.context {
            title.push_str(" › ");
            title.push_str(context);
        }
        let language = example.language.as_deref().unwrap_or("-");
        println!(
            "{} {} {}",
            subheader(&title),
            label(&example.category.to_string()),
            dim(language)
        );
        println!("{}", rule(RULE_WIDTH));
        print!("{}", highlighter.highlight(&example.code, example.language.as_deref()));
        if !example.code.ends_with('\n') {
            println!();
        }
        println!("{}", rule(RULE_WIDTH));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use docscan_document::ApiKind;

    use super::*;

    fn topic(level: u8, text: &str, slug: &str, children: Vec<TopicNode>) -> TopicNode {
        TopicNode {
            level,
            text: text.into(),
            slug: slug.into(),
            children,
        }
    }

    #[test]
    fn topics_are_indented_by_depth() {
        let forest = vec![topic(
            1,
            "Routing",
            "routing",
            vec![topic(2, "Dynamic Segments", "dynamic-segments", vec![])],
        )];
        let out = format_topics(&forest);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  Routing "));
        assert!(lines[1].starts_with("    Dynamic Segments "));
        assert!(lines[1].contains("#dynamic-segments"));
    }

    #[test]
    fn keyword_table_lists_ranks() {
        let terms = vec![
            ScoredTerm {
                term: "hooks".into(),
                score: 2.5,
            },
            ScoredTerm {
                term: "state".into(),
                score: 1.0,
            },
        ];
        let rendered = keyword_table(&terms, |t| (t == "hooks").then_some(15)).to_string();
        assert!(rendered.contains("hooks"));
        assert!(rendered.contains("2.500"));
        assert!(rendered.contains("15"));
    }

    #[test]
    fn api_table_shows_kind_and_files() {
        let methods = vec![ApiMethod {
            name: "router.push".into(),
            kind: ApiKind::MemberCall,
            count: 2,
            files: vec!["a.md".into(), "b.md".into()],
        }];
        let rendered = api_table(&methods).to_string();
        assert!(rendered.contains("router.push"));
        assert!(rendered.contains("member"));
        assert!(rendered.contains("a.md, b.md"));
    }
}
