//! Heading/body text extraction for keyword analysis.

use serde::Serialize;

use crate::Block;

/// The two text buckets of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextBuckets {
    /// All heading text in document order, space-joined.
    pub heading_text: String,
    /// All paragraph and list-item text in document order, space-joined.
    pub body_text: String,
}

/// Splits blocks into heading text and body text.
///
/// Heading levels are not distinguished. Code and frontmatter blocks are ignored.
pub fn extract_text(blocks: &[Block]) -> TextBuckets {
    let mut headings = Vec::new();
    let mut body = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { text, .. } => headings.push(text.as_str()),
            Block::Paragraph { text } | Block::ListItem { text, .. } => body.push(text.as_str()),
            Block::Frontmatter(_) | Block::Code { .. } => {}
        }
    }

    TextBuckets {
        heading_text: headings.join(" "),
        body_text: body.join(" "),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BlockParser, Frontmatter, MarkdownParser};

    #[test]
    fn separates_headings_from_body() {
        let blocks = MarkdownParser::new().parse(
            "# Routing\n\nPages live in the app directory.\n\n## Dynamic Segments\n\n- brackets\n- catch-all\n",
        );
        let buckets = extract_text(&blocks);
        assert_eq!(buckets.heading_text, "Routing Dynamic Segments");
        assert_eq!(
            buckets.body_text,
            "Pages live in the app directory. brackets catch-all"
        );
    }

    #[test]
    fn ignores_code_and_frontmatter() {
        let blocks = vec![
            Block::Frontmatter(Frontmatter {
                url: Some("https://example.com".into()),
                ..Frontmatter::default()
            }),
            Block::Code {
                language: Some("js".into()),
                code: "fetchData()".into(),
            },
            Block::Paragraph {
                text: "Fetching data".into(),
            },
        ];
        let buckets = extract_text(&blocks);
        assert_eq!(buckets.heading_text, "");
        assert_eq!(buckets.body_text, "Fetching data");
    }

    #[test]
    fn empty_blocks_give_empty_buckets() {
        assert_eq!(extract_text(&[]), TextBuckets::default());
    }
}
