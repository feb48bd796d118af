//! config commands - Get, set, or append configuration values

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::{Context, EXIT_NOT_SET};
use crate::core::types::{ConfigKey, ConfigValue};
use crate::git::{GitConfig, Target};
use crate::process::ProcessRunner;

/// How `get` reports a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetMode {
    /// The last entry (git's own resolution).
    Last,
    /// Every entry, one per line.
    All,
    /// The value read as a boolean.
    Bool,
}

fn parse_key(key: &str) -> Result<ConfigKey> {
    ConfigKey::new(key).context("Invalid configuration key")
}

/// Get a configuration value.
///
/// Exits with [`EXIT_NOT_SET`] when the key has no entry.
pub fn get<R: ProcessRunner>(
    ctx: &Context,
    git: &GitConfig<R>,
    key: &str,
    global: bool,
    mode: GetMode,
) -> Result<ExitCode> {
    let key = parse_key(key)?;
    let repo;
    let env = ctx.env_override();
    let target = if global {
        Target::Global(env.as_ref())
    } else {
        repo = ctx.repository()?;
        Target::Local(&repo)
    };

    let found = match mode {
        GetMode::Last => match git.get(target, &key)? {
            ConfigValue::Set(value) => {
                println!("{}", value);
                true
            }
            ConfigValue::Absent => false,
        },
        GetMode::All => {
            let values = git.get_all(target, &key)?;
            for value in &values {
                println!("{}", value);
            }
            !values.is_empty()
        }
        GetMode::Bool => match git.get_bool(target, &key)? {
            Some(value) => {
                println!("{}", value);
                true
            }
            None => false,
        },
    };

    if found {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::debug!(key = %key, scope = %target.scope(), "key not set");
        Ok(ExitCode::from(EXIT_NOT_SET))
    }
}

/// Replace every entry of a key with one value.
pub fn set<R: ProcessRunner>(
    ctx: &Context,
    git: &GitConfig<R>,
    key: &str,
    value: &str,
    local: bool,
) -> Result<ExitCode> {
    let key = parse_key(key)?;

    if local {
        let repo = ctx.repository()?;
        git.set_config_value(&repo, &key, value)
            .with_context(|| format!("Failed to set local {}", key))?;
    } else {
        let env = ctx.env_override();
        git.set_global_config_value(&key, value, env.as_ref())
            .with_context(|| format!("Failed to set global {}", key))?;
    }

    if !ctx.quiet {
        println!("Set {} = {}", key, value);
    }

    Ok(ExitCode::SUCCESS)
}

/// Append a global entry, keeping existing ones.
pub fn add<R: ProcessRunner>(
    ctx: &Context,
    git: &GitConfig<R>,
    key: &str,
    value: &str,
) -> Result<ExitCode> {
    let key = parse_key(key)?;
    let env = ctx.env_override();
    git.add_global_config_value(&key, value, env.as_ref())
        .with_context(|| format!("Failed to add global {}", key))?;

    if !ctx.quiet {
        println!("Added {} = {}", key, value);
    }

    Ok(ExitCode::SUCCESS)
}
