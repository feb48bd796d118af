//! process::mock
//!
//! Mock process runner for deterministic testing.
//!
//! # Design
//!
//! Responses are scripted up front and handed out in order, one per `run`
//! call. Every request is recorded so tests can assert on the exact argument
//! vector, working directory, and environment the git layer produced.
//!
//! # Example
//!
//! ```
//! use gitconf::process::{MockRunner, ProcessOutput, ProcessRequest, ProcessRunner};
//!
//! let runner = MockRunner::new().respond(ProcessOutput::new(0, "false\n", ""));
//!
//! let out = runner.run(&ProcessRequest::new(["config", "--get", "core.bare"], "/repo")).unwrap();
//! assert_eq!(out.stdout, "false\n");
//!
//! let requests = runner.requests();
//! assert_eq!(requests[0].args, vec!["config", "--get", "core.bare"]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{ProcessError, ProcessOutput, ProcessRequest, ProcessRunner};

/// Mock runner for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug, Default)]
struct MockRunnerInner {
    responses: VecDeque<MockResponse>,
    requests: Vec<ProcessRequest>,
}

/// A scripted outcome for one `run` call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The child ran and exited with this output.
    Output(ProcessOutput),
    /// The program could not be spawned.
    SpawnFailure,
    /// The child exceeded its deadline.
    TimedOut(Duration),
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed-process response.
    pub fn respond(self, output: ProcessOutput) -> Self {
        self.push(MockResponse::Output(output));
        self
    }

    /// Queue a primitive-level failure.
    pub fn fail_with(self, response: MockResponse) -> Self {
        self.push(response);
        self
    }

    // Recovers the guard from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, MockRunnerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a response on a shared handle.
    pub fn push(&self, response: MockResponse) {
        let mut inner = self.lock();
        inner.responses.push_back(response);
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<ProcessRequest> {
        let inner = self.lock();
        inner.requests.clone()
    }

    /// Number of scripted responses not yet consumed.
    pub fn pending(&self) -> usize {
        let inner = self.lock();
        inner.responses.len()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        let mut inner = self.lock();
        inner.requests.push(request.clone());

        match inner.responses.pop_front() {
            Some(MockResponse::Output(output)) => Ok(output),
            Some(MockResponse::TimedOut(timeout)) => Err(ProcessError::TimedOut {
                program: "git".into(),
                timeout,
            }),
            Some(MockResponse::SpawnFailure) => Err(ProcessError::Spawn {
                program: "git".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock spawn failure"),
            }),
            None => Err(ProcessError::Spawn {
                program: "git".into(),
                source: std::io::Error::other("no scripted response left"),
            }),
        }
    }

    fn program(&self) -> &str {
        "git"
    }
}
