//! Command-line interface for docscan.

use std::process::ExitCode;

use docscan::cli::{CommandContext, args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let ctx = match CommandContext::for_command(&cli.command) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    commands::run(cli.command, &ctx)
}
