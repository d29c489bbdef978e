//! Implementation of `docscan config`.

use std::process::ExitCode;

use docscan_config::discover_config_files;

use crate::cli::{
    context::CommandContext,
    output::{Highlighter, dim, subheader, warning},
};

/// Shows config files, effective settings and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    let files = discover_config_files(&ctx.cwd);
    println!("{}", subheader("Config files:"));
    if files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    for path in &files {
        println!("   {}", path.display());
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&config.settings_to_toml()));
    println!();

    let warnings = config.validate();
    if !warnings.is_empty() {
        println!();
        println!("{}", subheader("Warnings:"));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
    }

    ExitCode::SUCCESS
}
