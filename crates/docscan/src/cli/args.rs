//! Clap argument definitions for the `docscan` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use docscan_document::CodeCategory;

/// Parses a code category name.
fn parse_category(s: &str) -> Result<CodeCategory, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "docscan")]
#[command(about = "Keyword, topic and code example analysis for documentation bundles")]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// The documentation root shared by every analysis command.
#[derive(Args, Debug, Clone)]
pub struct RootArgs {
    /// Documentation root containing the pages directory
    pub root: PathBuf,
}

/// Shared JSON output flag.
#[derive(Args, Debug, Clone, Default)]
pub struct JsonArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `docscan keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    #[command(flatten)]
    /// Documentation root.
    pub root: RootArgs,

    /// Number of top keywords [default: 50]
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Show every ranked keyword instead of the top slice
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `docscan topics`.
#[derive(Args, Debug, Clone)]
pub struct TopicsCommand {
    #[command(flatten)]
    /// Documentation root.
    pub root: RootArgs,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `docscan examples`.
#[derive(Args, Debug, Clone)]
pub struct ExamplesCommand {
    #[command(flatten)]
    /// Documentation root.
    pub root: RootArgs,

    /// Only show examples in this category (shell, configuration, markup, styling, query,
    /// component, program, output, unlabeled)
    #[arg(short = 'c', long, value_parser = parse_category)]
    pub category: Option<CodeCategory>,

    /// Only show examples with this fence language
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Maximum examples to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `docscan api`.
#[derive(Args, Debug, Clone)]
pub struct ApiCommand {
    #[command(flatten)]
    /// Documentation root.
    pub root: RootArgs,

    /// Maximum API names to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Drop names seen fewer times than this [default: 1]
    #[arg(long)]
    pub min_occurrences: Option<usize>,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `docscan summary`.
#[derive(Args, Debug, Clone)]
pub struct SummaryCommand {
    #[command(flatten)]
    /// Documentation root.
    pub root: RootArgs,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `docscan init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.docscan.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `docscan` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank the keywords of a documentation bundle
    #[command(after_help = "\
SCORING:
  Every heading occurrence weighs 3 and every body occurrence 1 in the
  most-frequent list. Keyword scores are TF-IDF sums over all pages, with
  idf = 1 + ln(N / (1 + df)).

EXAMPLES:
  docscan keywords ./docs
  docscan keywords ./docs -n 10
  docscan keywords ./docs --json")]
    Keywords(KeywordsCommand),

    /// Show the heading hierarchy of every page
    Topics(TopicsCommand),

    /// List code examples with their categories
    Examples(ExamplesCommand),

    /// List API names used in code examples
    Api(ApiCommand),

    /// Show every analysis of a documentation bundle
    Summary(SummaryCommand),

    /// Initialize docscan configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// Documentation root of analysis commands.
    pub fn root(&self) -> Option<&PathBuf> {
        match self {
            Self::Keywords(cmd) => Some(&cmd.root.root),
            Self::Topics(cmd) => Some(&cmd.root.root),
            Self::Examples(cmd) => Some(&cmd.root.root),
            Self::Api(cmd) => Some(&cmd.root.root),
            Self::Summary(cmd) => Some(&cmd.root.root),
            Self::Init(_) | Self::Config => None,
        }
    }
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use docscan_config::KeywordSettings;
    use docscan_keywords::DEFAULT_TOP_N;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_defaults_match_settings() {
        let cmd = Cli::command();
        let top_help = get_arg_help(&cmd, "keywords", "top");
        assert!(
            top_help.contains(&format!("[default: {DEFAULT_TOP_N}]")),
            "keywords --top help should contain default {DEFAULT_TOP_N}: {top_help}"
        );
        assert_eq!(KeywordSettings::default().top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn parses_category_filter() {
        let cli = Cli::try_parse_from(["docscan", "examples", "docs", "-c", "config"]).unwrap();
        let Commands::Examples(cmd) = cli.command else {
            panic!("expected examples command");
        };
        assert_eq!(cmd.category, Some(CodeCategory::Configuration));
        assert_eq!(cmd.root.root, PathBuf::from("docs"));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["docscan", "keywords", "docs", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.root().is_some());
    }
}
