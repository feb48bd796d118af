//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments (e.g. the config key)
//! 2. Calls [`GitConfig`] for the read or write
//! 3. Formats and displays output, and picks the exit status
//!
//! Handlers are generic over the process runner so they can be exercised
//! against a [`crate::process::MockRunner`].

mod config_cmd;
mod path;

pub use config_cmd::{add, get, set, GetMode};
pub use path::path;

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::settings;
use crate::git::GitConfig;
use crate::process::ProcessRunner;

/// Dispatch a command using the runner described by the user's settings.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    let loaded = settings::load().context("Failed to load gitconf settings")?;
    if let Some(path) = &loaded.path {
        tracing::debug!(path = %path.display(), "using settings file");
    }
    let git = GitConfig::new(loaded.settings.runner());
    execute(command, ctx, &git)
}

/// Run a parsed command against an explicit git doorway.
pub fn execute<R: ProcessRunner>(
    command: Command,
    ctx: &Context,
    git: &GitConfig<R>,
) -> Result<ExitCode> {
    match command {
        Command::Get {
            key,
            global,
            all,
            boolean,
        } => {
            let mode = if all {
                GetMode::All
            } else if boolean {
                GetMode::Bool
            } else {
                GetMode::Last
            };
            get(ctx, git, &key, global, mode)
        }
        Command::Set { key, value, local } => set(ctx, git, &key, &value, local),
        Command::Add { key, value } => add(ctx, git, &key, &value),
        Command::Path => path(ctx, git),
    }
}
