//! Page parsing for docscan.
//!
//! This crate turns the raw text of a documentation page into an ordered sequence of
//! block-level nodes and derives structural facts from it:
//! - YAML frontmatter extraction (`url`, `title`)
//! - Heading and body text buckets for keyword extraction
//! - Topic hierarchies built from heading levels
//! - Code examples with language-based categorization
//! - API method names detected inside code examples

#![warn(missing_docs)]

mod api;
mod block;
mod code;
mod error;
mod extract;
mod frontmatter;
mod markdown;
mod page;
mod slug;
mod topics;

pub use api::{ApiCall, ApiDetector, ApiKind, ApiMethod, ApiTally};
pub use block::{Block, BlockParser, PageKind};
pub use code::{CodeCategory, CodeExample, extract_code_examples};
pub use error::DocumentError;
pub use extract::{TextBuckets, extract_text};
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use markdown::MarkdownParser;
pub use page::Page;
pub use topics::{TopicNode, build_topic_tree};
