//! Implementation of `docscan examples`.

use std::process::ExitCode;

use docscan_bundle::{Bundle, PageExample};

use crate::cli::{
    args::ExamplesCommand,
    context::CommandContext,
    output::{Highlighter, dim, fail, print_examples, print_json},
};

/// Checks an example against the command's filters.
fn matches(cmd: &ExamplesCommand, item: &PageExample) -> bool {
    let example = &item.example;
    let category_ok = cmd.category.is_none_or(|c| c == example.category);
    let language_ok = cmd.language.as_deref().is_none_or(|wanted| {
        example
            .language
            .as_deref()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(wanted))
    });
    category_ok && language_ok
}

/// Lists code examples, optionally filtered by category or language.
pub fn run(ctx: &CommandContext, cmd: &ExamplesCommand) -> ExitCode {
    let root = ctx.resolve(&cmd.root.root);
    let bundle = match Bundle::open(&root, &ctx.config.bundle) {
        Ok(bundle) => bundle,
        Err(e) => return fail(&e),
    };

    let examples: Vec<PageExample> = bundle
        .code_examples()
        .into_iter()
        .filter(|item| matches(cmd, item))
        .take(cmd.limit.unwrap_or(usize::MAX))
        .collect();

    if cmd.output.json {
        return print_json(&examples);
    }
    if examples.is_empty() {
        println!("{}", dim("No code examples found."));
        return ExitCode::SUCCESS;
    }
    print_examples(&examples, &Highlighter::new());
    ExitCode::SUCCESS
}
