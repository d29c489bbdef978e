//! GitHub-style anchors for topic headings.

use std::collections::HashMap;

/// Produces anchors that are unique within one page.
///
/// The first occurrence of a heading gets the bare anchor; repeats get `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct Slugifier {
    /// Times each base anchor has been handed out.
    seen: HashMap<String, usize>,
}

impl Slugifier {
    /// Returns the unique anchor for a heading.
    pub fn slugify(&mut self, heading: &str) -> String {
        let base = base_slug(heading);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

/// Lower-cases, keeps ASCII alphanumerics and underscores, and joins words with single hyphens.
fn base_slug(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    let mut pending_hyphen = false;

    for c in heading.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        String::from("heading")
    } else {
        slug
    }
}
