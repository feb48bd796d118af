//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Repository to use for local-scope operations
//! - `--home <path>`: Resolve the global config as if `HOME` were this path
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitconf - Typed access to git's local and global configuration
#[derive(Parser, Debug)]
#[command(name = "gitconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitconf was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Resolve the global config under this home directory
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a configuration value
    #[command(
        name = "get",
        long_about = "Read a configuration value.\n\n\
            Reads from the repository's local config unless --global is given. \
            When a key has several entries the last one is printed, unless --all \
            is given. A key that is not set prints nothing and exits with status 1.",
        after_help = "\
EXAMPLES:
    gitconf get core.bare
    gitconf get --global user.name
    gitconf get --global --all remote.origin.fetch
    gitconf get --bool core.bare"
    )]
    Get {
        /// Configuration key (section.name)
        key: String,

        /// Read from the global config instead of the repository
        #[arg(long)]
        global: bool,

        /// Print every entry, one per line
        #[arg(long, conflicts_with = "boolean")]
        all: bool,

        /// Interpret the value as a boolean
        #[arg(long = "bool")]
        boolean: bool,
    },

    /// Replace every entry of a key with one value
    #[command(
        name = "set",
        long_about = "Replace every entry of a key with a single value.\n\n\
            Writes to the global config unless --local is given. Existing entries \
            for the key, however many, are replaced by exactly one.",
        after_help = "\
EXAMPLES:
    gitconf set user.name \"Ada Lovelace\"
    gitconf set --local core.editor vim
    gitconf --home /tmp/profile set user.email ada@example.com"
    )]
    Set {
        /// Configuration key (section.name)
        key: String,

        /// New value
        value: String,

        /// Write to the repository's local config
        #[arg(long)]
        local: bool,
    },

    /// Append a global entry without touching existing ones
    Add {
        /// Configuration key (section.name)
        key: String,

        /// Value to append
        value: String,
    },

    /// Print the path of the global config file
    #[command(
        name = "path",
        long_about = "Print the path of the global config file.\n\n\
            Git only reports where the global config lives once it holds at least \
            one entry, so this fails on an empty or missing global config."
    )]
    Path,
}
