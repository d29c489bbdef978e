//! Markdown block walker built on `pulldown-cmark`.
//!
//! Collapses the parser's event stream into [`Block`]s. Text inside a list item, including
//! the text of paragraphs nested in it, is attributed to that item. Tables, HTML and
//! thematic breaks produce no blocks.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::{Block, BlockParser};

/// Parser for markdown pages.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    /// Extensions enabled on the underlying parser.
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Creates a parser with GitHub-flavored extensions enabled.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES,
        }
    }
}

impl BlockParser for MarkdownParser {
    fn parse(&self, content: &str) -> Vec<Block> {
        let mut walker = Walker::default();
        for event in Parser::new_ext(content, self.options) {
            walker.handle(event);
        }
        walker.finish()
    }
}

/// An open code block being collected.
#[derive(Debug)]
struct OpenCode {
    /// Language from the fence info string.
    language: Option<String>,
    /// Code collected so far.
    code: String,
}

/// Event-stream state for building blocks.
///
/// Blocks are reserved in `slots` when they open so that output order follows the
/// position where each block starts, even when an outer list item closes after its
/// nested items.
#[derive(Debug, Default)]
struct Walker {
    /// Reserved block slots, `None` once a block turned out empty.
    slots: Vec<Option<Block>>,
    /// Open text containers; `None` marks a paragraph absorbed into a list item.
    frames: Vec<Option<usize>>,
    /// Current list nesting depth.
    list_depth: usize,
    /// Code block currently being collected.
    code: Option<OpenCode>,
}

impl Walker {
    /// Processes a single parser event.
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some(code) = self.code.as_mut() {
                    code.code.push_str(&text);
                } else {
                    self.push_text(&text);
                }
            }
            Event::Code(text) => self.push_text(&text),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            _ => {}
        }
    }

    /// Opens containers for block-level tags.
    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                let slot = self.reserve(Block::Heading {
                    level: heading_level_to_u8(level),
                    text: String::new(),
                });
                self.frames.push(Some(slot));
            }
            Tag::Paragraph => {
                if let Some(owner) = self.innermost_item() {
                    self.separate(owner);
                    self.frames.push(None);
                } else {
                    let slot = self.reserve(Block::Paragraph {
                        text: String::new(),
                    });
                    self.frames.push(Some(slot));
                }
            }
            Tag::List(_) => self.list_depth += 1,
            Tag::Item => {
                let slot = self.reserve(Block::ListItem {
                    depth: self.list_depth,
                    text: String::new(),
                });
                self.frames.push(Some(slot));
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(OpenCode {
                    language,
                    code: String::new(),
                });
            }
            _ => {}
        }
    }

    /// Closes containers for block-level tags.
    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::Item => {
                if let Some(Some(slot)) = self.frames.pop() {
                    self.close(slot);
                }
            }
            TagEnd::List(_) => self.list_depth = self.list_depth.saturating_sub(1),
            TagEnd::CodeBlock => {
                if let Some(open) = self.code.take() {
                    self.slots.push(Some(Block::Code {
                        language: open.language,
                        code: open.code,
                    }));
                }
            }
            _ => {}
        }
    }

    /// Reserves a slot for a block and returns its index.
    fn reserve(&mut self, block: Block) -> usize {
        self.slots.push(Some(block));
        self.slots.len() - 1
    }

    /// Returns the slot of the innermost open list item, if any.
    fn innermost_item(&self) -> Option<usize> {
        let slot = self.frames.iter().rev().flatten().next().copied()?;
        matches!(self.slots[slot], Some(Block::ListItem { .. })).then_some(slot)
    }

    /// Appends text to the innermost open container. Text outside containers is dropped.
    fn push_text(&mut self, fragment: &str) {
        let Some(slot) = self.frames.iter().rev().flatten().next().copied() else {
            return;
        };
        if let Some(text) = self.slots[slot].as_mut().and_then(block_text_mut) {
            text.push_str(fragment);
        }
    }

    /// Inserts a separator before a further paragraph inside the same list item.
    fn separate(&mut self, slot: usize) {
        if let Some(text) = self.slots[slot].as_mut().and_then(block_text_mut)
            && !text.is_empty()
        {
            text.push(' ');
        }
    }

    /// Normalizes a closed block's text, dropping the block if nothing remains.
    fn close(&mut self, slot: usize) {
        let Some(block) = self.slots[slot].as_mut() else {
            return;
        };
        let Some(text) = block_text_mut(block) else {
            return;
        };
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            self.slots[slot] = None;
        } else {
            *text = normalized;
        }
    }

    /// Returns the collected blocks in document order.
    fn finish(self) -> Vec<Block> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Returns a mutable handle to the text of a text-bearing block.
fn block_text_mut(block: &mut Block) -> Option<&mut String> {
    match block {
        Block::Heading { text, .. } | Block::Paragraph { text } | Block::ListItem { text, .. } => {
            Some(text)
        }
        Block::Frontmatter(_) | Block::Code { .. } => None,
    }
}

/// Extracts the language tag from a fence info string such as `rust,ignore` or `tsx title="x"`.
fn fence_language(info: &str) -> Option<String> {
    let word = info
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{' || c == '}')
        .find(|w| !w.is_empty())?;
    let word = word.trim_start_matches('.');
    (!word.is_empty()).then(|| word.to_ascii_lowercase())
}

/// Converts a `pulldown_cmark` heading level to 1-6.
fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
