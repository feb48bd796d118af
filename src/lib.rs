//! gitconf - Typed access to git's layered configuration
//!
//! gitconf reads and writes keys in git's repository-local and user-global
//! config files by running `git config` and turning its output and exit
//! codes into typed results.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to git)
//! - [`git`] - Single interface for all `git config` invocations
//! - [`process`] - Process-execution primitive (real and mock runners)
//! - [`core`] - Domain types and tool settings
//!
//! # Correctness Invariants
//!
//! 1. A key that is not set reads as `ConfigValue::Absent`, never an error
//! 2. A process failure is never reported as "not set"
//! 3. Local and global scopes are never merged
//! 4. After a replace-all write, the key has exactly one entry

pub mod cli;
pub mod core;
pub mod git;
pub mod process;
