//! Block-level nodes produced by page parsers.
//!
//! Every parser reduces a page to the same flat, document-ordered sequence of blocks.
//! Downstream consumers only look at block kinds and their text, never at a parser's
//! own tree representation.

use std::path::Path;

use serde::Serialize;

use crate::{DocumentError, Frontmatter, MarkdownParser};

/// A block-level node in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Metadata block at the head of the page.
    Frontmatter(Frontmatter),
    /// A heading of any level.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Literal text content, including inline code.
        text: String,
    },
    /// A paragraph outside of any list item.
    Paragraph {
        /// Literal text content.
        text: String,
    },
    /// A list item with all of its nested paragraph text.
    ListItem {
        /// Nesting depth, 1 for a top-level list.
        depth: usize,
        /// Literal text content.
        text: String,
    },
    /// A fenced or indented code block.
    Code {
        /// Lower-cased first word of the fence info string.
        language: Option<String>,
        /// Raw code, without the fences.
        code: String,
    },
}

impl Block {
    /// Returns the heading level and text if this block is a heading.
    pub fn as_heading(&self) -> Option<(u8, &str)> {
        match self {
            Self::Heading { level, text } => Some((*level, text)),
            _ => None,
        }
    }
}

/// Turns raw page text into an ordered sequence of blocks.
///
/// Parsers are lenient: malformed input yields a best-effort block list, never an error.
pub trait BlockParser {
    /// Parses page content (frontmatter already removed) into blocks.
    fn parse(&self, content: &str) -> Vec<Block>;
}

/// The kind of page, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// `.md`, `.markdown` or `.mdx` page.
    Markdown,
    /// `.txt` page. Cached text pages (`llms.txt` and the like) are markdown in practice.
    Text,
}

impl PageKind {
    /// Classifies a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("md" | "markdown" | "mdx") => Ok(Self::Markdown),
            Some("txt") => Ok(Self::Text),
            _ => Err(DocumentError::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parses content with the parser for this kind. Both kinds go through the markdown
    /// walker, so `#` lines in a text page are headings.
    pub fn parse(self, content: &str) -> Vec<Block> {
        match self {
            Self::Markdown | Self::Text => MarkdownParser::new().parse(content),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_extensions() {
        assert_eq!(
            PageKind::from_path(Path::new("a.md")).unwrap(),
            PageKind::Markdown
        );
        assert_eq!(
            PageKind::from_path(Path::new("a.MD")).unwrap(),
            PageKind::Markdown
        );
        assert_eq!(
            PageKind::from_path(Path::new("notes.txt")).unwrap(),
            PageKind::Text
        );
        assert!(PageKind::from_path(Path::new("image.png")).is_err());
        assert!(PageKind::from_path(Path::new("Makefile")).is_err());
    }

    #[test]
    fn as_heading_only_matches_headings() {
        let heading = Block::Heading {
            level: 2,
            text: "Routing".into(),
        };
        assert_eq!(heading.as_heading(), Some((2, "Routing")));

        let para = Block::Paragraph {
            text: "Routing".into(),
        };
        assert_eq!(para.as_heading(), None);
    }
}
