//! Code example extraction and categorization.
//!
//! Categories are decided from the fence language first. Two content checks refine that:
//! JavaScript/TypeScript that renders JSX counts as a component, and an unlabeled block
//! whose lines start with a `$ ` prompt counts as shell.

use std::{fmt, str, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::Block;

/// Matches JSX being returned or written at the start of a line.
static JSX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)return\s*\(?\s*<[A-Za-z>]|^\s*<[A-Z][A-Za-z0-9.]*[\s/>]")
        .expect("JSX pattern should compile")
});

/// Languages whose code is run in a terminal.
const SHELL_LANGUAGES: &[&str] = &[
    "bash", "sh", "shell", "zsh", "console", "terminal", "powershell", "ps1", "cmd", "fish",
];
/// Languages used for configuration and data files.
const CONFIGURATION_LANGUAGES: &[&str] = &[
    "json", "jsonc", "json5", "yaml", "yml", "toml", "ini", "env", "dotenv", "properties",
];
/// Markup languages.
const MARKUP_LANGUAGES: &[&str] = &["html", "xml", "svg", "vue", "markdown", "md", "mdx"];
/// Stylesheet languages.
const STYLING_LANGUAGES: &[&str] = &["css", "scss", "sass", "less"];
/// Query languages.
const QUERY_LANGUAGES: &[&str] = &["sql", "graphql", "gql"];
/// Languages that are always components.
const COMPONENT_LANGUAGES: &[&str] = &["jsx", "tsx"];
/// JavaScript dialects that may contain JSX.
const SCRIPT_LANGUAGES: &[&str] = &["js", "javascript", "ts", "typescript", "mjs", "cjs"];
/// Labels for program output rather than source.
const OUTPUT_LANGUAGES: &[&str] = &["text", "txt", "plaintext", "plain", "log", "output"];

/// The kind of a code example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeCategory {
    /// Terminal commands.
    Shell,
    /// Configuration or data files.
    Configuration,
    /// HTML, XML and similar markup.
    Markup,
    /// Stylesheets.
    Styling,
    /// Database or API queries.
    Query,
    /// UI components written with JSX.
    Component,
    /// Source code in any other language.
    Program,
    /// Program output or plain text.
    Output,
    /// No language and nothing recognizable.
    Unlabeled,
}

impl CodeCategory {
    /// All categories in display order.
    pub const ALL: [Self; 9] = [
        Self::Shell,
        Self::Configuration,
        Self::Markup,
        Self::Styling,
        Self::Query,
        Self::Component,
        Self::Program,
        Self::Output,
        Self::Unlabeled,
    ];

    /// Categorizes a code block by its language tag and content.
    pub fn classify(language: Option<&str>, code: &str) -> Self {
        let Some(language) = language else {
            return if has_shell_prompt(code) {
                Self::Shell
            } else {
                Self::Unlabeled
            };
        };

        let is = |list: &[&str]| list.contains(&language);
        if is(SHELL_LANGUAGES) {
            Self::Shell
        } else if is(CONFIGURATION_LANGUAGES) {
            Self::Configuration
        } else if is(MARKUP_LANGUAGES) {
            Self::Markup
        } else if is(STYLING_LANGUAGES) {
            Self::Styling
        } else if is(QUERY_LANGUAGES) {
            Self::Query
        } else if is(OUTPUT_LANGUAGES) {
            Self::Output
        } else if is(COMPONENT_LANGUAGES) || (is(SCRIPT_LANGUAGES) && JSX.is_match(code)) {
            Self::Component
        } else {
            Self::Program
        }
    }
}

impl fmt::Display for CodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shell => "shell",
            Self::Configuration => "configuration",
            Self::Markup => "markup",
            Self::Styling => "styling",
            Self::Query => "query",
            Self::Component => "component",
            Self::Program => "program",
            Self::Output => "output",
            Self::Unlabeled => "unlabeled",
        };
        f.write_str(name)
    }
}

impl str::FromStr for CodeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == wanted || (wanted == "config" && *c == Self::Configuration))
            .ok_or_else(|| {
                let names: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
                format!(
                    "unknown category '{s}', expected one of: {}",
                    names.join(", ")
                )
            })
    }
}

/// A code block pulled out of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    /// Lower-cased fence language, if any.
    pub language: Option<String>,
    /// Category derived from language and content.
    pub category: CodeCategory,
    /// Raw code.
    pub code: String,
    /// Number of lines of code.
    pub line_count: usize,
    /// Text of the nearest preceding heading.
    pub context: Option<String>,
}

/// Collects every code block of a page, in document order.
pub fn extract_code_examples(blocks: &[Block]) -> Vec<CodeExample> {
    let mut examples = Vec::new();
    let mut context: Option<&str> = None;

    for block in blocks {
        match block {
            Block::Heading { text, .. } => context = Some(text),
            Block::Code { language, code } => examples.push(CodeExample {
                language: language.clone(),
                category: CodeCategory::classify(language.as_deref(), code),
                line_count: code.lines().count(),
                code: code.clone(),
                context: context.map(str::to_string),
            }),
            _ => {}
        }
    }

    examples
}

/// Checks whether any line of an unlabeled block looks like a shell prompt.
fn has_shell_prompt(code: &str) -> bool {
    code.lines().any(|line| line.trim_start().starts_with("$ "))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BlockParser, MarkdownParser};

    #[test]
    fn classify_by_language() {
        assert_eq!(
            CodeCategory::classify(Some("bash"), "npm i"),
            CodeCategory::Shell
        );
        assert_eq!(
            CodeCategory::classify(Some("json"), "{}"),
            CodeCategory::Configuration
        );
        assert_eq!(
            CodeCategory::classify(Some("html"), "<p></p>"),
            CodeCategory::Markup
        );
        assert_eq!(
            CodeCategory::classify(Some("css"), "a {}"),
            CodeCategory::Styling
        );
        assert_eq!(
            CodeCategory::classify(Some("sql"), "SELECT 1"),
            CodeCategory::Query
        );
        assert_eq!(
            CodeCategory::classify(Some("tsx"), "const x = 1"),
            CodeCategory::Component
        );
        assert_eq!(
            CodeCategory::classify(Some("rust"), "fn main() {}"),
            CodeCategory::Program
        );
        assert_eq!(
            CodeCategory::classify(Some("text"), "done"),
            CodeCategory::Output
        );
    }

    #[test]
    fn javascript_with_jsx_is_component() {
        let code = "export default function Page() {\n  return (\n    <main>Hello</main>\n  )\n}\n";
        assert_eq!(
            CodeCategory::classify(Some("js"), code),
            CodeCategory::Component
        );

        let code = "import Link from 'next/link'\n\n<Link href=\"/\">Home</Link>\n";
        assert_eq!(
            CodeCategory::classify(Some("jsx"), code),
            CodeCategory::Component
        );
        assert_eq!(
            CodeCategory::classify(Some("ts"), code),
            CodeCategory::Component
        );
    }

    #[test]
    fn javascript_without_jsx_is_program() {
        let code = "export async function GET(request) {\n  return Response.json({ ok: true })\n}\n";
        assert_eq!(
            CodeCategory::classify(Some("ts"), code),
            CodeCategory::Program
        );
    }

    #[test]
    fn comparisons_are_not_jsx() {
        let code = "if (a < b) {\n  return a\n}\n";
        assert_eq!(
            CodeCategory::classify(Some("js"), code),
            CodeCategory::Program
        );
    }

    #[test]
    fn unlabeled_blocks() {
        assert_eq!(
            CodeCategory::classify(None, "$ npm run dev\n"),
            CodeCategory::Shell
        );
        assert_eq!(
            CodeCategory::classify(None, "some output\n"),
            CodeCategory::Unlabeled
        );
    }

    #[test]
    fn category_parse_and_display() {
        for category in CodeCategory::ALL {
            assert_eq!(
                category.to_string().parse::<CodeCategory>().unwrap(),
                category
            );
        }
        assert_eq!(
            "config".parse::<CodeCategory>().unwrap(),
            CodeCategory::Configuration
        );
        assert_eq!(
            "Shell".parse::<CodeCategory>().unwrap(),
            CodeCategory::Shell
        );
        assert!("nonsense".parse::<CodeCategory>().is_err());
    }

    #[test]
    fn extract_records_context_and_lines() {
        let blocks = MarkdownParser::new().parse(
            "```bash\nnpx create-next-app\n```\n\n# Fetching\n\n## On the server\n\n```js\nconst res = await fetch(url)\nconst data = await res.json()\n```\n",
        );
        let examples = extract_code_examples(&blocks);
        assert_eq!(examples.len(), 2);

        assert_eq!(examples[0].context, None);
        assert_eq!(examples[0].category, CodeCategory::Shell);
        assert_eq!(examples[0].line_count, 1);

        assert_eq!(examples[1].context.as_deref(), Some("On the server"));
        assert_eq!(examples[1].language.as_deref(), Some("js"));
        assert_eq!(examples[1].category, CodeCategory::Program);
        assert_eq!(examples[1].line_count, 2);
    }
}
