//! A parsed documentation page.

use std::path::Path;

use crate::{
    Block, CodeExample, Frontmatter, PageKind, TextBuckets, TopicNode, build_topic_tree,
    extract_code_examples, extract_text, parse_frontmatter,
};

/// A page reduced to its blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// File name relative to the pages directory.
    pub filename: String,
    /// Parser used for the body.
    pub kind: PageKind,
    /// Blocks in document order. A frontmatter block, when present, comes first.
    pub blocks: Vec<Block>,
}

impl Page {
    /// Parses raw page content.
    ///
    /// Frontmatter is split off before the body reaches the parser, so its text never
    /// shows up in headings or paragraphs.
    pub fn parse(filename: impl Into<String>, kind: PageKind, content: &str) -> Self {
        let (frontmatter, body) = parse_frontmatter(content);
        let mut blocks = Vec::new();
        if let Some(frontmatter) = frontmatter {
            blocks.push(Block::Frontmatter(frontmatter));
        }
        blocks.extend(kind.parse(body));

        Self {
            filename: filename.into(),
            kind,
            blocks,
        }
    }

    /// Frontmatter of the page, if it had any.
    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        match self.blocks.first() {
            Some(Block::Frontmatter(fm)) => Some(fm),
            _ => None,
        }
    }

    /// Source URL recorded in the frontmatter.
    pub fn url(&self) -> Option<&str> {
        self.frontmatter()?.url.as_deref()
    }

    /// Frontmatter title, else the first level-1 heading, else the file stem.
    pub fn title(&self) -> String {
        if let Some(title) = self.frontmatter().and_then(|fm| fm.title.as_deref()) {
            return title.to_string();
        }
        if let Some((_, text)) = self
            .blocks
            .iter()
            .filter_map(Block::as_heading)
            .find(|(level, _)| *level == 1)
        {
            return text.to_string();
        }
        Path::new(&self.filename)
            .file_stem()
            .map_or_else(|| self.filename.clone(), |s| s.to_string_lossy().into_owned())
    }

    /// Number of headings of any level.
    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.as_heading().is_some()).count()
    }

    /// Heading and body text for keyword extraction.
    pub fn text_buckets(&self) -> TextBuckets {
        extract_text(&self.blocks)
    }

    /// Topic forest built from the page's headings.
    pub fn topics(&self) -> Vec<TopicNode> {
        build_topic_tree(&self.blocks)
    }

    /// Code examples in document order.
    pub fn code_examples(&self) -> Vec<CodeExample> {
        extract_code_examples(&self.blocks)
    }
}
