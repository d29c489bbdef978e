//! Topic hierarchies built from heading levels.
//!
//! Each heading becomes a child of the nearest preceding heading with a strictly lower
//! level. Headings without such a predecessor are roots, so a page that starts at `##`
//! or skips back to `#` still yields a well-formed forest.

use serde::Serialize;

use crate::{Block, slug::Slugifier};

/// A heading with the headings nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicNode {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub text: String,
    /// Anchor, unique within the page.
    pub slug: String,
    /// Nested headings in document order.
    pub children: Vec<Self>,
}

impl TopicNode {
    /// Total number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Builds the topic forest for a page from its blocks.
pub fn build_topic_tree(blocks: &[Block]) -> Vec<TopicNode> {
    let mut slugs = Slugifier::default();
    let mut roots = Vec::new();
    // Path from a root to the most recent heading.
    let mut open: Vec<TopicNode> = Vec::new();

    for (level, text) in blocks.iter().filter_map(Block::as_heading) {
        while open.last().is_some_and(|top| top.level >= level) {
            close_top(&mut open, &mut roots);
        }
        open.push(TopicNode {
            level,
            text: text.to_string(),
            slug: slugs.slugify(text),
            children: Vec::new(),
        });
    }

    while !open.is_empty() {
        close_top(&mut open, &mut roots);
    }

    roots
}

/// Pops the innermost open node and attaches it to its parent or to the roots.
fn close_top(open: &mut Vec<TopicNode>, roots: &mut Vec<TopicNode>) {
    let Some(node) = open.pop() else {
        return;
    };
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
