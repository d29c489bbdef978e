//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use docscan_config::Config;

use super::args::Commands;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Builds the context a command needs.
    ///
    /// Analysis commands discover configuration from their documentation root, so a bundle
    /// can carry its own `.docscan.toml`. `config` discovers from the working directory and
    /// `init` skips loading, so it works even when an existing config file is invalid.
    pub fn for_command(command: &Commands) -> Result<Self, ExitCode> {
        match command {
            Commands::Init(_) => Self::load_cwd_only(),
            Commands::Config => Self::load(),
            _ => {
                let cwd = current_dir_or_failure()?;
                let root = command.root().map_or_else(|| cwd.clone(), |r| cwd.join(r));
                let config = load_config_or_failure(&root)?;
                Ok(Self { cwd, config })
            }
        }
    }

    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves a documentation root against the working directory.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.cwd.join(root)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(dir: &Path) -> Result<Config, ExitCode> {
    Config::load(dir).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
