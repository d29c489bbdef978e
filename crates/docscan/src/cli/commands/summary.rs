//! Implementation of `docscan summary`.

use std::process::ExitCode;

use docscan_bundle::analyze_bundle;

use crate::cli::{
    args::SummaryCommand,
    context::CommandContext,
    output::{
        api_table, code_stats_table, dim, document_table, fail, header, keyword_table,
        print_json, subheader, warning,
    },
};

/// Rows shown for the keyword and API sections.
const SECTION_ROWS: usize = 10;

/// Shows every analysis of a documentation bundle.
pub fn run(ctx: &CommandContext, cmd: &SummaryCommand) -> ExitCode {
    let root = ctx.resolve(&cmd.root.root);
    let summary = match analyze_bundle(&root, &ctx.config) {
        Ok(summary) => summary,
        Err(e) => return fail(&e),
    };

    if cmd.output.json {
        return print_json(&summary);
    }

    println!("{}", header(&summary.root.display().to_string()));
    println!(
        "{}",
        dim(&format!(
            "{} documents, {} code examples, {} unique terms",
            summary.document_count, summary.code_stats.total, summary.keywords.unique_terms
        ))
    );
    for skipped in &summary.skipped {
        println!(
            "{}",
            warning(&format!("skipped {}: {}", skipped.filename, skipped.reason))
        );
    }
    println!();

    if summary.documents.is_empty() {
        println!("{}", dim("No pages found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Documents:"));
    println!("{}", document_table(&summary.documents));
    println!();

    if summary.code_stats.total > 0 {
        println!("{}", subheader("Code examples:"));
        println!("{}", code_stats_table(&summary.code_stats));
        println!();
    }

    let top = &summary.keywords.top_keywords;
    if !top.is_empty() {
        println!("{}", subheader("Top keywords:"));
        let shown = &top[..top.len().min(SECTION_ROWS)];
        println!(
            "{}",
            keyword_table(shown, |term| summary.keywords.count(term))
        );
        println!();
    }

    if !summary.api_methods.is_empty() {
        println!("{}", subheader("API names:"));
        let shown = &summary.api_methods[..summary.api_methods.len().min(SECTION_ROWS)];
        println!("{}", api_table(shown));
    }

    ExitCode::SUCCESS
}
