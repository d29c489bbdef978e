//! Syntax highlighting and terminal colors for docscan.
//!
//! Code examples carry the language tag of their fence, which is often an alias rather than
//! a syntax name (`zsh`, `jsonc`, `console`). The highlighter resolves those tags before
//! looking up a syntax, and falls back to plain text when nothing matches.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Fence tags mapped to the token syntect knows the syntax by.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("shell", "sh"),
    ("console", "sh"),
    ("zsh", "sh"),
    ("fish", "sh"),
    ("dotenv", "sh"),
    ("env", "sh"),
    ("jsonc", "json"),
    ("json5", "json"),
    ("yml", "yaml"),
    ("jsx", "js"),
    ("mdx", "md"),
    ("markdown", "md"),
    ("gql", "graphql"),
    ("plaintext", "txt"),
    ("text", "txt"),
    ("output", "txt"),
    ("log", "txt"),
];

/// Resolves a fence language tag to a syntax token.
pub fn syntax_token(language: &str) -> &str {
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(language))
        .map_or(language, |(_, token)| token)
}

/// Highlights code for terminal output.
pub struct Highlighter {
    /// Language definitions, including the two-face extras (TOML, TypeScript, TSX).
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML, used for configuration output.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, Some("toml"))
    }

    /// Checks whether a language tag resolves to a known syntax.
    pub fn supports(&self, language: &str) -> bool {
        self.find_syntax(language).is_some()
    }

    /// Highlights content written in `language`.
    ///
    /// Unknown or missing languages are rendered as plain text, still followed by a color
    /// reset.
    pub fn highlight(&self, content: &str, language: Option<&str>) -> String {
        let syntax = language
            .and_then(|lang| self.find_syntax(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Looks up a syntax by resolved token, as extension first and then as name.
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        let token = syntax_token(language);
        self.syntax_set
            .find_syntax_by_extension(token)
            .or_else(|| self.syntax_set.find_syntax_by_token(token))
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text, for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Magenta text, for labels.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Green text, for success.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text, for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text, for errors.
    pub const RED: &str = "\x1b[31m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in a color code and a reset.
fn paint(code: &str, text: &str) -> String {
    format!("{code}{text}{}", colors::RESET)
}

/// Formats a header in bold cyan.
pub fn header(text: &str) -> String {
    paint(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Formats a subheader in bold.
pub fn subheader(text: &str) -> String {
    paint(colors::BOLD, text)
}

/// Formats a short tag such as a code category.
pub fn label(text: &str) -> String {
    paint(colors::MAGENTA, &format!("[{text}]"))
}

/// Dims less important text.
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

/// Formats a success message in green.
pub fn success(text: &str) -> String {
    paint(colors::GREEN, text)
}

/// Formats a warning in yellow.
pub fn warning(text: &str) -> String {
    paint(colors::YELLOW, text)
}

/// Formats an error in red.
pub fn error(text: &str) -> String {
    paint(colors::RED, text)
}

/// A dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}
