//! Command implementations and dispatch.

pub mod api;
pub mod config;
pub mod examples;
pub mod init;
pub mod keywords;
pub mod summary;
pub mod topics;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Keywords(cmd) => keywords::run(ctx, &cmd),
        Commands::Topics(cmd) => topics::run(ctx, &cmd),
        Commands::Examples(cmd) => examples::run(ctx, &cmd),
        Commands::Api(cmd) => api::run(ctx, &cmd),
        Commands::Summary(cmd) => summary::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
