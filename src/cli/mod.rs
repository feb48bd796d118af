//! cli
//!
//! Command-line interface layer for gitconf.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging
//! - Delegate to command handlers, which call [`crate::git::GitConfig`]
//!
//! # Exit Status
//!
//! - `0`: success
//! - `1`: the key is not set (mirrors `git config --get`)
//! - `2`: any error

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::repository::Repository;
use crate::core::types::EnvOverride;

/// Exit status for a key that is not set.
pub const EXIT_NOT_SET: u8 = 1;
/// Exit status for any failure.
pub const EXIT_FAILURE: u8 = 2;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Home directory override for the global scope.
    pub home: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Repository for local-scope operations.
    pub fn repository(&self) -> Result<Repository> {
        let cwd = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        Ok(Repository::new(cwd))
    }

    /// Environment override for global-scope operations.
    pub fn env_override(&self) -> Option<EnvOverride> {
        self.home.as_ref().map(EnvOverride::home)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        home: cli.home.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    tracing::debug!(command = ?cli.command, "parsed arguments");

    match commands::dispatch(cli.command, &ctx) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `debug`, and the
/// default is `warn`.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second install (e.g. from tests) is harmless.
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
