//! Implementation of `docscan keywords`.

use std::process::ExitCode;

use docscan_bundle::extract_keywords;

use crate::cli::{
    args::KeywordsCommand,
    context::CommandContext,
    output::{dim, fail, frequency_table, keyword_table, print_json, subheader},
};

/// Number of most frequent terms shown next to the ranking.
const FREQUENT_ROWS: usize = 10;

/// Ranks the keywords of a documentation bundle.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let mut config = ctx.config.clone();
    if let Some(top) = cmd.top {
        config.keywords.top_n = top;
    }

    let root = ctx.resolve(&cmd.root.root);
    let report = match extract_keywords(&root, &config) {
        Ok(report) => report,
        Err(e) => return fail(&e),
    };

    if cmd.output.json {
        return print_json(&report);
    }

    println!(
        "{}",
        dim(&format!(
            "{} documents, {} tokens, {} unique terms",
            report.total_documents, report.total_tokens, report.unique_terms
        ))
    );
    println!();

    if report.keywords.is_empty() {
        println!("{}", dim("No keywords found."));
        return ExitCode::SUCCESS;
    }

    let ranked = if cmd.all {
        &report.keywords
    } else {
        &report.top_keywords
    };
    println!("{}", subheader("Keywords (TF-IDF):"));
    println!("{}", keyword_table(ranked, |term| report.count(term)));
    println!();

    let frequent = &report.most_frequent[..report.most_frequent.len().min(FREQUENT_ROWS)];
    println!("{}", subheader("Most frequent:"));
    println!("{}", frequency_table(frequent));

    ExitCode::SUCCESS
}
