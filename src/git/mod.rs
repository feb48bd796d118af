//! git
//!
//! Single interface for reading and writing git configuration.
//!
//! # Architecture
//!
//! This module is the **only doorway** to `git config`. Argument vectors are
//! built here, exit codes are interpreted here, and callers only ever see
//! [`ConfigValue`](crate::core::types::ConfigValue) or a typed
//! [`GitConfigError`]. Processes are run through the
//! [`ProcessRunner`](crate::process::ProcessRunner) seam.
//!
//! # Responsibilities
//!
//! - Reading a key from local or global scope (last entry wins)
//! - Reading every entry of a multi-valued key
//! - Locating the global config file
//! - Replacing all entries of a key with one value
//!
//! # Invariants
//!
//! - "Not set" is a value ([`ConfigValue::Absent`](crate::core::types::ConfigValue)),
//!   never an error
//! - Process failures are never reported as "not set"
//! - Local and global scopes are never merged
//! - Environment overrides apply to the child process only

mod config;
mod origin;

pub use config::{GitConfig, GitConfigError, Target};
