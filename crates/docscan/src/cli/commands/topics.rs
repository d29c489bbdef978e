//! Implementation of `docscan topics`.

use std::process::ExitCode;

use docscan_bundle::Bundle;

use crate::cli::{
    args::TopicsCommand,
    context::CommandContext,
    output::{dim, fail, print_json, print_topics},
};

/// Shows the heading hierarchy of every page.
pub fn run(ctx: &CommandContext, cmd: &TopicsCommand) -> ExitCode {
    let root = ctx.resolve(&cmd.root.root);
    let bundle = match Bundle::open(&root, &ctx.config.bundle) {
        Ok(bundle) => bundle,
        Err(e) => return fail(&e),
    };
    let topics = bundle.topics();

    if cmd.output.json {
        return print_json(&topics);
    }
    if topics.is_empty() {
        println!("{}", dim("No pages found."));
        return ExitCode::SUCCESS;
    }
    print_topics(&topics);
    ExitCode::SUCCESS
}
