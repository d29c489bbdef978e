//! Implementation of `docscan api`.

use std::process::ExitCode;

use docscan_bundle::{Bundle, api_detector};

use crate::cli::{
    args::ApiCommand,
    context::CommandContext,
    output::{api_table, dim, fail, print_json},
};

/// Lists API names detected in code examples.
pub fn run(ctx: &CommandContext, cmd: &ApiCommand) -> ExitCode {
    let root = ctx.resolve(&cmd.root.root);
    let bundle = match Bundle::open(&root, &ctx.config.bundle) {
        Ok(bundle) => bundle,
        Err(e) => return fail(&e),
    };

    let min_occurrences = cmd
        .min_occurrences
        .unwrap_or(ctx.config.api.min_occurrences);
    let mut methods = bundle.api_methods(&api_detector(&ctx.config.api), min_occurrences);
    if let Some(limit) = cmd.limit {
        methods.truncate(limit);
    }

    if cmd.output.json {
        return print_json(&methods);
    }
    if methods.is_empty() {
        println!("{}", dim("No API names found."));
        return ExitCode::SUCCESS;
    }
    println!("{}", api_table(&methods));
    ExitCode::SUCCESS
}
