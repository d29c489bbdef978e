//! YAML frontmatter parsing for cached documentation pages.
//!
//! Cached pages usually start with a metadata block recording where the page came from:
//!
//! ```markdown
//! ---
//! url: https://example.com/docs/routing
//! title: Routing
//! ---
//!
//! # Routing
//! ```

use serde::{Deserialize, Serialize};

/// Line that opens and closes a frontmatter block.
const DELIMITER: &str = "---";

/// Parsed frontmatter from a documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Frontmatter {
    /// Source URL of the cached page.
    pub url: Option<String>,
    /// Page title.
    pub title: Option<String>,
    /// Short page description.
    pub description: Option<String>,
}

/// Parses YAML frontmatter from the start of a page.
///
/// Returns the parsed frontmatter and the content that follows it. When there is no
/// frontmatter or the block is never closed, returns `None` together with the original
/// content (minus a leading BOM).
///
/// A closed block is always split off, even when its YAML is malformed. Unquoted titles
/// such as `title: Routing: Overview` are common in cached pages; for those the fields are
/// recovered with a line scan.
pub fn parse_frontmatter(content: &str) -> (Option<Frontmatter>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some((yaml, rest)) = split_frontmatter(content) else {
        return (None, content);
    };

    if yaml.trim().is_empty() {
        return (Some(Frontmatter::default()), rest);
    }

    match serde_yaml::from_str::<Frontmatter>(yaml) {
        Ok(frontmatter) => (Some(frontmatter), rest),
        Err(_) => (Some(scan_fields(yaml)), rest),
    }
}

/// Reads `key: value` lines from a block that is not valid YAML.
///
/// Only the first colon separates key from value. Surrounding quotes are dropped.
fn scan_fields(yaml: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::default();
    for line in yaml.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());
        if value.is_empty() {
            continue;
        }
        let slot = match key.trim() {
            "url" => &mut frontmatter.url,
            "title" => &mut frontmatter.title,
            "description" => &mut frontmatter.description,
            _ => continue,
        };
        slot.get_or_insert_with(|| value.to_string());
    }
    frontmatter
}

/// Strips one pair of matching single or double quotes.
fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q)?.strip_suffix(*q))
        .unwrap_or(value)
}

/// Splits content into the YAML between the delimiters and the remaining body.
///
/// Offsets are exact for both `\n` and `\r\n` line endings.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let rest = &content[offset + line.len()..];
            return Some((&content[yaml_start..offset], rest));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_title() {
        let content = "---\nurl: https://example.com/docs/routing\ntitle: Routing\n---\n\n# Routing\n";

        let (fm, rest) = parse_frontmatter(content);
        let fm = fm.expect("should parse frontmatter");
        assert_eq!(fm.url.as_deref(), Some("https://example.com/docs/routing"));
        assert_eq!(fm.title.as_deref(), Some("Routing"));
        assert_eq!(rest, "\n# Routing\n");
    }

    #[test]
    fn no_frontmatter_returns_content() {
        let content = "# Heading\n\nBody";
        let (fm, rest) = parse_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(rest, content);
    }

    #[test]
    fn empty_block_is_default() {
        let (fm, rest) = parse_frontmatter("---\n---\nBody");
        assert_eq!(fm, Some(Frontmatter::default()));
        assert_eq!(rest, "Body");
    }

    #[test]
    fn unclosed_block_is_ignored() {
        let content = "---\nurl: https://example.com\n\n# Never closed";
        let (fm, rest) = parse_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(rest, content);
    }

    #[test]
    fn malformed_yaml_is_still_stripped() {
        let content = "---\nurl: [unclosed\n---\nBody";
        let (fm, rest) = parse_frontmatter(content);
        assert_eq!(fm.unwrap().url.as_deref(), Some("[unclosed"));
        assert_eq!(rest, "Body");
    }

    #[test]
    fn colon_in_title_falls_back_to_line_scan() {
        let content = "---\nurl: https://nextjs.org/docs/routing\ntitle: Routing: Overview\n---\n\nPrefetching works.\n";
        let (fm, rest) = parse_frontmatter(content);
        let fm = fm.unwrap();
        assert_eq!(fm.url.as_deref(), Some("https://nextjs.org/docs/routing"));
        assert_eq!(fm.title.as_deref(), Some("Routing: Overview"));
        assert_eq!(fm.description, None);
        assert_eq!(rest, "\nPrefetching works.\n");
    }

    #[test]
    fn line_scan_strips_quotes_and_keeps_first_value() {
        let fm = scan_fields("title: 'Caching: ISR'\ntitle: Other\n- stray\nurl:\n");
        assert_eq!(fm.title.as_deref(), Some("Caching: ISR"));
        assert_eq!(fm.url, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let content = "---\nurl: https://example.com\nfetched_at: 2024-01-01\nversion: 14\n---\nBody";
        let (fm, rest) = parse_frontmatter(content);
        assert_eq!(fm.unwrap().url.as_deref(), Some("https://example.com"));
        assert_eq!(rest, "Body");
    }

    #[test]
    fn handles_crlf_and_bom() {
        let content = "\u{feff}---\r\nurl: https://example.com\r\n---\r\nBody";
        let (fm, rest) = parse_frontmatter(content);
        assert_eq!(fm.unwrap().url.as_deref(), Some("https://example.com"));
        assert_eq!(rest, "Body");
    }

    #[test]
    fn delimiter_must_open_the_page() {
        let content = "Intro\n---\nurl: nope\n---\n";
        let (fm, _) = parse_frontmatter(content);
        assert!(fm.is_none());
    }
}
