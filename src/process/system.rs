//! process::system
//!
//! `ProcessRunner` backed by real child processes.
//!
//! Without a timeout the child is run with `std::process::Command`. With a
//! timeout it is run on a single-threaded tokio runtime under
//! `tokio::time::timeout`; the child is spawned with `kill_on_drop`, so a
//! child that misses its deadline or fails while being waited on is killed.

use std::process::{Command, ExitStatus, Output, Stdio};
use std::time::Duration;

use tracing::debug;

use super::{ProcessError, ProcessOutput, ProcessRequest, ProcessRunner};

/// Spawns `program` for every request.
///
/// A runner with a timeout builds its own tokio runtime per call and must
/// not be used from inside an async context.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: String,
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Runner for the `git` found on `PATH`, with no timeout.
    pub fn git() -> Self {
        Self::new("git")
    }

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kill the child and fail with `ProcessError::TimedOut` after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command(&self, request: &ProcessRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&request.args)
            .current_dir(&request.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(env) = &request.env {
            for name in env.removed() {
                cmd.env_remove(name);
            }
            cmd.envs(env.vars());
        }

        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ProcessError {
        ProcessError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    fn wait_error(&self, source: std::io::Error) -> ProcessError {
        ProcessError::Wait {
            program: self.program.clone(),
            source,
        }
    }

    fn exit_code(&self, status: ExitStatus) -> Result<i32, ProcessError> {
        status.code().ok_or_else(|| ProcessError::Terminated {
            program: self.program.clone(),
        })
    }

    fn collect(&self, output: Output) -> Result<ProcessOutput, ProcessError> {
        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: self.exit_code(output.status)?,
        })
    }

    fn run_blocking(&self, request: &ProcessRequest) -> Result<Output, ProcessError> {
        let child = self
            .command(request)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        child.wait_with_output().map_err(|e| self.wait_error(e))
    }

    fn run_with_deadline(
        &self,
        request: &ProcessRequest,
        timeout: Duration,
    ) -> Result<Output, ProcessError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| ProcessError::Runtime { source })?;

        let mut cmd = tokio::process::Command::from(self.command(request));
        cmd.kill_on_drop(true);

        runtime.block_on(async {
            let child = cmd.spawn().map_err(|e| self.spawn_error(e))?;
            match tokio::time::timeout(timeout, child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(self.wait_error(e)),
                Err(_) => {
                    debug!(program = %self.program, ?timeout, "deadline exceeded, killing child");
                    Err(ProcessError::TimedOut {
                        program: self.program.clone(),
                        timeout,
                    })
                }
            }
        })
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::git()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        debug!(
            program = %self.program,
            args = ?request.args,
            cwd = %request.cwd.display(),
            "spawning process"
        );

        let raw = match self.timeout {
            Some(timeout) => self.run_with_deadline(request, timeout)?,
            None => self.run_blocking(request)?,
        };
        let output = self.collect(raw)?;

        debug!(program = %self.program, exit_code = output.exit_code, "process exited");
        Ok(output)
    }

    fn program(&self) -> &str {
        &self.program
    }
}
