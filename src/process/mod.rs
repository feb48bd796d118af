//! process
//!
//! The process-execution primitive the config layer runs git through.
//!
//! # Architecture
//!
//! [`ProcessRunner`] is the only seam between this crate and the operating
//! system. The git doorway ([`crate::git`]) builds argument vectors and
//! interprets exit codes; a runner only spawns, waits, and collects output.
//!
//! - [`SystemRunner`] - spawns real processes via `std::process::Command`
//! - [`MockRunner`] - scripted responses for deterministic tests
//!
//! # Invariants
//!
//! - Arguments are passed as a vector; no shell is involved
//! - Environment overrides apply to the child only
//! - Spawn failures and timeouts are errors, never a synthesized exit code

pub mod mock;
mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::core::types::EnvOverride;

/// Errors from the process primitive itself.
///
/// A child that runs and exits non-zero is *not* a `ProcessError`; its exit
/// code is returned in [`ProcessOutput`] for the caller to interpret.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started (missing binary, bad cwd, ...).
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Waiting for the child or reading its output failed.
    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },

    /// The child did not exit before the deadline and was killed.
    #[error("'{program}' timed out after {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    /// The async runtime used to enforce a timeout could not be started.
    #[error("failed to start process runtime: {source}")]
    Runtime { source: std::io::Error },

    /// The child was terminated by a signal and has no exit code.
    #[error("'{program}' was terminated without an exit code")]
    Terminated { program: String },
}

/// One invocation: argument vector, working directory, environment override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Option<EnvOverride>,
}

impl ProcessRequest {
    pub fn new<I, S>(args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
            env: None,
        }
    }

    /// Attach an environment override (ignored when empty).
    pub fn with_env(mut self, env: Option<&EnvOverride>) -> Self {
        self.env = env.filter(|e| !e.is_empty()).cloned();
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an argument vector against a fixed program.
///
/// Implementations must be usable from multiple threads; the config layer
/// holds no state of its own between calls.
pub trait ProcessRunner: Send + Sync {
    /// Run the request to completion and return its output.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` only when the child could not be run to
    /// completion. Non-zero exits are reported through `ProcessOutput`.
    fn run(&self, request: &ProcessRequest) -> Result<ProcessOutput, ProcessError>;

    /// Name of the program being run, used in error context.
    fn program(&self) -> &str;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Box<R> {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        (**self).run(request)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for std::sync::Arc<R> {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        (**self).run(request)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_override_is_dropped() {
        let req = ProcessRequest::new(["config"], "/tmp").with_env(Some(&EnvOverride::new()));
        assert!(req.env.is_none());
    }

    #[test]
    fn env_override_is_kept() {
        let env = EnvOverride::home("/tmp/h");
        let req = ProcessRequest::new(["config"], "/tmp").with_env(Some(&env));
        assert_eq!(req.env, Some(env));
    }

    #[test]
    fn output_success_is_exit_zero() {
        assert!(ProcessOutput::new(0, "", "").success());
        assert!(!ProcessOutput::new(1, "", "").success());
    }

    #[test]
    fn error_display_names_program() {
        let err = ProcessError::TimedOut {
            program: "git".into(),
            timeout: Duration::from_secs(3),
        };
        assert!(err.to_string().contains("git"));
        assert!(err.to_string().contains("timed out"));
    }
}
