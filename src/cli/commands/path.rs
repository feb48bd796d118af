//! path command - Print where the global config file lives

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::git::GitConfig;
use crate::process::ProcessRunner;

/// Print the global config file path.
pub fn path<R: ProcessRunner>(ctx: &Context, git: &GitConfig<R>) -> Result<ExitCode> {
    let env = ctx.env_override();
    let path = git
        .get_global_config_path(env.as_ref())
        .context("Failed to locate the global config file")?;

    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}
