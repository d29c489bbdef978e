//! Implementation of `docscan init`.

use std::{fs, path::PathBuf, process::ExitCode};

use docscan_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{Highlighter, fail, subheader},
};

/// Where `init` writes and which template it uses.
struct Target {
    /// File to create.
    path: PathBuf,
    /// Whether this is `~/.docscan.toml`.
    global: bool,
}

/// Picks the target file. Running in the home directory always means the global file.
fn target(ctx: &CommandContext, cmd: &InitCommand) -> Result<Target, ExitCode> {
    let global_path = global_config_path();
    let in_home = global_path
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);

    if cmd.global || in_home {
        let Some(path) = global_path else {
            return Err(fail(&"could not determine home directory"));
        };
        return Ok(Target { path, global: true });
    }
    Ok(Target {
        path: ctx.cwd.join(CONFIG_FILENAME),
        global: false,
    })
}

/// Writes a commented `.docscan.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let target = match target(ctx, cmd) {
        Ok(target) => target,
        Err(code) => return code,
    };

    if target.path.exists() && !cmd.force {
        eprintln!(
            "error: {} already exists (use --force to overwrite)",
            target.path.display()
        );
        return ExitCode::FAILURE;
    }

    let template = if target.global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&target.path, &template) {
        return fail(&format!("failed to write {}: {e}", target.path.display()));
    }

    println!("Created {}", target.path.display());
    println!();
    println!("{}", subheader("Template:"));
    print!("{}", Highlighter::new().highlight_toml(&template));
    println!();

    ExitCode::SUCCESS
}
