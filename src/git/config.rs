//! git::config
//!
//! Typed reads and writes of git configuration through the `git config`
//! subcommand.
//!
//! # Exit Codes
//!
//! `git config --get` exits 1 when the key has no entry. That case becomes
//! [`ConfigValue::Absent`]. Git also exits 1 for a key it cannot parse, but
//! then says so on stderr, so exit 1 is only "absent" when stdout and stderr
//! are both empty. Every other non-zero exit becomes
//! [`GitConfigError::UnexpectedExit`] carrying the argument vector and
//! stderr. The mapping lives in [`interpret_get`] and nowhere else.
//!
//! # Replace-All
//!
//! [`GitConfig::set_global_config_value`] issues a single
//! `git config --global --replace-all <key> <value>`. Git rewrites the file
//! through a lock file and rename, so concurrent readers see either the old
//! entries or the single new one, never a key with no entries. This layer
//! relies on that and does not delete-then-add on its own.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::origin::{first_origin, normalize_origin_path, origin_file};
use crate::core::repository::RepositoryHandle;
use crate::core::types::{ConfigKey, ConfigScope, ConfigValue, EnvOverride};
use crate::process::{ProcessError, ProcessOutput, ProcessRequest, ProcessRunner, SystemRunner};

/// Exit status of `git config --get` for a key with no entry.
const EXIT_KEY_NOT_FOUND: i32 = 1;

/// Errors from configuration operations.
///
/// "Key not set" is not an error; see [`ConfigValue::Absent`].
#[derive(Debug, Error)]
pub enum GitConfigError {
    /// The process primitive could not run git to completion.
    #[error("git {} failed to run: {source}", .args.join(" "))]
    Process {
        /// Arguments passed to git
        args: Vec<String>,
        source: ProcessError,
    },

    /// Git ran and exited with a status this layer does not expect.
    #[error("git {} exited with status {exit_code}: {}", .args.join(" "), .stderr.trim())]
    UnexpectedExit {
        /// Arguments passed to git
        args: Vec<String>,
        /// The exit status
        exit_code: i32,
        /// Captured stderr
        stderr: String,
    },

    /// The global scope has no entries, so git reports no origin file.
    #[error("global config path cannot be resolved: the global config has no entries")]
    GlobalConfigUnresolved,

    /// Git exited successfully but its output was not in the expected shape.
    #[error("unexpected output from git {}: {message}", .args.join(" "))]
    MalformedOutput {
        /// Arguments passed to git
        args: Vec<String>,
        /// Description of the problem
        message: String,
    },
}

impl GitConfigError {
    /// Whether this error came from running git (spawn, timeout, bad exit).
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            GitConfigError::Process { .. } | GitConfigError::UnexpectedExit { .. }
        )
    }

    /// Exit status of the failed git invocation, when it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitConfigError::UnexpectedExit { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

/// The config file an operation addresses, with what it needs to run.
///
/// Local operations run inside a repository; global operations run
/// anywhere, optionally with an environment override relocating `HOME`.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Local(&'a dyn RepositoryHandle),
    Global(Option<&'a EnvOverride>),
}

impl Target<'_> {
    pub fn scope(&self) -> ConfigScope {
        match self {
            Target::Local(_) => ConfigScope::Local,
            Target::Global(_) => ConfigScope::Global,
        }
    }
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Local(repo) => f
                .debug_tuple("Local")
                .field(&repo.working_dir())
                .finish(),
            Target::Global(env) => f.debug_tuple("Global").field(env).finish(),
        }
    }
}

/// Doorway to `git config`.
///
/// Holds no configuration state; every call runs git and parses its
/// output. Generic over the process primitive so tests can substitute a
/// [`crate::process::MockRunner`].
///
/// # Example
///
/// ```no_run
/// use gitconf::core::repository::Repository;
/// use gitconf::core::types::{ConfigKey, ConfigValue, EnvOverride};
/// use gitconf::git::GitConfig;
///
/// let git = GitConfig::system();
/// let repo = Repository::new("/path/to/repo");
/// let bare = git.get_config_value(&repo, &ConfigKey::new("core.bare")?)?;
/// assert_eq!(bare, ConfigValue::Set("false".into()));
///
/// let env = EnvOverride::home("/tmp/isolated-home");
/// git.set_global_config_value(&ConfigKey::new("user.name")?, "Ada", Some(&env))?;
/// let path = git.get_global_config_path(Some(&env))?;
/// println!("global config lives at {}", path.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitConfig<R = SystemRunner> {
    runner: R,
    global_cwd: PathBuf,
}

impl GitConfig<SystemRunner> {
    /// Use the `git` on `PATH` with no timeout.
    pub fn system() -> Self {
        Self::new(SystemRunner::git())
    }
}

impl<R: ProcessRunner> GitConfig<R> {
    /// Wrap a process runner.
    ///
    /// Global-scope commands run in the system temp directory, which exists
    /// on every platform and is normally outside any repository.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            global_cwd: std::env::temp_dir(),
        }
    }

    /// Directory global-scope commands run in.
    pub fn with_global_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.global_cwd = cwd.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Read `key` from the target scope.
    ///
    /// When the key has several entries, git returns the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or exits with anything other
    /// than success or "key not found".
    pub fn get(&self, target: Target<'_>, key: &ConfigKey) -> Result<ConfigValue, GitConfigError> {
        let args = scoped_args(target.scope(), ["--get", key.as_str()]);
        let output = self.exec(target, &args)?;
        interpret_get(args, output)
    }

    /// Read every entry for `key` in the target scope, in file order.
    ///
    /// A key with no entries yields an empty vector.
    pub fn get_all(
        &self,
        target: Target<'_>,
        key: &ConfigKey,
    ) -> Result<Vec<String>, GitConfigError> {
        let args = scoped_args(target.scope(), ["-z", "--get-all", key.as_str()]);
        let output = self.exec(target, &args)?;
        match interpret_get(args, output)? {
            ConfigValue::Absent => Ok(Vec::new()),
            ConfigValue::Set(raw) => Ok(split_nul_terminated(&raw)),
        }
    }

    /// Read `key` as a boolean, using git's own boolean parsing.
    ///
    /// Git accepts `true/yes/on/1` and `false/no/off/0` (and a bare key as
    /// true) and prints the canonical form. A value git cannot read as a
    /// boolean is reported as [`GitConfigError::UnexpectedExit`].
    pub fn get_bool(
        &self,
        target: Target<'_>,
        key: &ConfigKey,
    ) -> Result<Option<bool>, GitConfigError> {
        let args = scoped_args(target.scope(), ["--type=bool", "--get", key.as_str()]);
        let output = self.exec(target, &args)?;
        match interpret_get(args.clone(), output)? {
            ConfigValue::Absent => Ok(None),
            ConfigValue::Set(v) if v == "true" => Ok(Some(true)),
            ConfigValue::Set(v) if v == "false" => Ok(Some(false)),
            ConfigValue::Set(other) => Err(GitConfigError::MalformedOutput {
                args,
                message: format!("expected 'true' or 'false', got '{other}'"),
            }),
        }
    }

    /// Read `key` from the repository's local config.
    pub fn get_config_value(
        &self,
        repository: &dyn RepositoryHandle,
        key: &ConfigKey,
    ) -> Result<ConfigValue, GitConfigError> {
        self.get(Target::Local(repository), key)
    }

    /// Read `key` from the global config.
    pub fn get_global_config_value(
        &self,
        key: &ConfigKey,
        env: Option<&EnvOverride>,
    ) -> Result<ConfigValue, GitConfigError> {
        self.get(Target::Global(env), key)
    }

    /// Read every local entry for `key`.
    pub fn get_all_config_values(
        &self,
        repository: &dyn RepositoryHandle,
        key: &ConfigKey,
    ) -> Result<Vec<String>, GitConfigError> {
        self.get_all(Target::Local(repository), key)
    }

    /// Read every global entry for `key`.
    pub fn get_all_global_config_values(
        &self,
        key: &ConfigKey,
        env: Option<&EnvOverride>,
    ) -> Result<Vec<String>, GitConfigError> {
        self.get_all(Target::Global(env), key)
    }

    /// Read a local boolean.
    pub fn get_boolean_config_value(
        &self,
        repository: &dyn RepositoryHandle,
        key: &ConfigKey,
    ) -> Result<Option<bool>, GitConfigError> {
        self.get_bool(Target::Local(repository), key)
    }

    /// Read a global boolean.
    pub fn get_global_boolean_config_value(
        &self,
        key: &ConfigKey,
        env: Option<&EnvOverride>,
    ) -> Result<Option<bool>, GitConfigError> {
        self.get_bool(Target::Global(env), key)
    }

    // =========================================================================
    // Locator
    // =========================================================================

    /// Path of the file git treats as the global config.
    ///
    /// Git only reports an origin alongside an entry it resolved, so this
    /// needs at least one global entry. Any entry will do; the lookup is not
    /// tied to a particular key.
    ///
    /// The result is the first global file git read. When both the XDG file
    /// (`$XDG_CONFIG_HOME/git/config`) and `~/.gitconfig` exist that is the
    /// XDG file, even though writes go to `~/.gitconfig`.
    ///
    /// # Errors
    ///
    /// Returns [`GitConfigError::GlobalConfigUnresolved`] when the global
    /// config is empty or does not exist yet.
    pub fn get_global_config_path(
        &self,
        env: Option<&EnvOverride>,
    ) -> Result<PathBuf, GitConfigError> {
        let target = Target::Global(env);
        let args = scoped_args(
            ConfigScope::Global,
            ["--list", "--show-origin", "--name-only", "-z"],
        );
        let output = self.exec(target, &args)?;

        if !output.success() {
            if is_missing_config_file(&output.stderr) {
                debug!("global config file does not exist");
                return Err(GitConfigError::GlobalConfigUnresolved);
            }
            return Err(unexpected_exit(args, output));
        }

        let Some(origin) = first_origin(&output.stdout) else {
            debug!("global config has no entries");
            return Err(GitConfigError::GlobalConfigUnresolved);
        };

        let raw = origin_file(origin).ok_or_else(|| GitConfigError::MalformedOutput {
            args: args.clone(),
            message: format!("origin '{origin}' is not a file"),
        })?;

        Ok(normalize_origin_path(raw, env))
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Replace every global entry for `key` with a single `value`.
    ///
    /// Works whether the key currently has zero, one, or many entries.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or exits non-zero. A failed
    /// write is not rolled back by this layer.
    pub fn set_global_config_value(
        &self,
        key: &ConfigKey,
        value: &str,
        env: Option<&EnvOverride>,
    ) -> Result<(), GitConfigError> {
        self.replace_all(Target::Global(env), key, value)
    }

    /// Replace every local entry for `key` with a single `value`.
    pub fn set_config_value(
        &self,
        repository: &dyn RepositoryHandle,
        key: &ConfigKey,
        value: &str,
    ) -> Result<(), GitConfigError> {
        self.replace_all(Target::Local(repository), key, value)
    }

    /// Append a global entry for `key`, keeping existing ones.
    pub fn add_global_config_value(
        &self,
        key: &ConfigKey,
        value: &str,
        env: Option<&EnvOverride>,
    ) -> Result<(), GitConfigError> {
        let target = Target::Global(env);
        let args = scoped_args(target.scope(), ["--add", key.as_str(), value]);
        self.exec_checked(target, args)
    }

    fn replace_all(
        &self,
        target: Target<'_>,
        key: &ConfigKey,
        value: &str,
    ) -> Result<(), GitConfigError> {
        let args = scoped_args(target.scope(), ["--replace-all", key.as_str(), value]);
        self.exec_checked(target, args)
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn cwd<'t>(&'t self, target: Target<'t>) -> &'t Path {
        match target {
            Target::Local(repo) => repo.working_dir(),
            Target::Global(_) => &self.global_cwd,
        }
    }

    fn exec(&self, target: Target<'_>, args: &[String]) -> Result<ProcessOutput, GitConfigError> {
        let env = match target {
            Target::Local(_) => None,
            Target::Global(env) => env,
        };
        let request = ProcessRequest::new(args.iter().cloned(), self.cwd(target)).with_env(env);

        debug!(scope = %target.scope(), args = ?args, "running git config");
        self.runner
            .run(&request)
            .map_err(|source| GitConfigError::Process {
                args: args.to_vec(),
                source,
            })
    }

    fn exec_checked(&self, target: Target<'_>, args: Vec<String>) -> Result<(), GitConfigError> {
        let output = self.exec(target, &args)?;
        if output.success() {
            Ok(())
        } else {
            Err(unexpected_exit(args, output))
        }
    }
}

/// Map the result of a `--get`-style invocation to a [`ConfigValue`].
fn interpret_get(args: Vec<String>, output: ProcessOutput) -> Result<ConfigValue, GitConfigError> {
    match output.exit_code {
        0 => Ok(ConfigValue::Set(strip_line_terminator(output.stdout))),
        EXIT_KEY_NOT_FOUND if output.stdout.is_empty() && output.stderr.trim().is_empty() => {
            Ok(ConfigValue::Absent)
        }
        _ => Err(unexpected_exit(args, output)),
    }
}

fn unexpected_exit(args: Vec<String>, output: ProcessOutput) -> GitConfigError {
    warn!(
        args = ?args,
        exit_code = output.exit_code,
        stderr = %output.stderr.trim(),
        "git config exited unexpectedly"
    );
    GitConfigError::UnexpectedExit {
        args,
        exit_code: output.exit_code,
        stderr: output.stderr,
    }
}

fn scoped_args<'a>(scope: ConfigScope, rest: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    ["config", scope.flag()]
        .into_iter()
        .chain(rest)
        .map(str::to_owned)
        .collect()
}

/// Drop exactly one trailing `\n` or `\r\n`.
fn strip_line_terminator(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

fn split_nul_terminated(raw: &str) -> Vec<String> {
    let body = raw.strip_suffix('\0').unwrap_or(raw);
    if body.is_empty() && raw.is_empty() {
        return Vec::new();
    }
    body.split('\0').map(str::to_owned).collect()
}

/// Whether git failed because the config file itself is missing.
fn is_missing_config_file(stderr: &str) -> bool {
    stderr.contains("unable to read config file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repository::Repository;
    use crate::process::mock::{MockResponse, MockRunner};
    use std::time::Duration;

    fn key(k: &str) -> ConfigKey {
        ConfigKey::new(k).unwrap()
    }

    fn git(runner: &MockRunner) -> GitConfig<MockRunner> {
        GitConfig::new(runner.clone()).with_global_cwd("/global")
    }

    mod reader {
        use super::*;

        #[test]
        fn reads_local_value_in_repository() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "false\n", ""));
            let repo = Repository::new("/repo");

            let value = git(&runner)
                .get_config_value(&repo, &key("core.bare"))
                .unwrap();

            assert_eq!(value, ConfigValue::Set("false".into()));
            let req = &runner.requests()[0];
            assert_eq!(req.args, vec!["config", "--local", "--get", "core.bare"]);
            assert_eq!(req.cwd, PathBuf::from("/repo"));
            assert!(req.env.is_none());
        }

        #[test]
        fn exit_one_is_absent() {
            let runner = MockRunner::new().respond(ProcessOutput::new(1, "", ""));
            let value = git(&runner)
                .get_config_value(&Repository::new("/repo"), &key("core.the-meaning-of-life"))
                .unwrap();
            assert_eq!(value, ConfigValue::Absent);
        }

        #[test]
        fn empty_value_is_not_absent() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "\n", ""));
            let value = git(&runner)
                .get_config_value(&Repository::new("/repo"), &key("user.name"))
                .unwrap();
            assert_eq!(value, ConfigValue::Set(String::new()));
        }

        #[test]
        fn only_one_terminator_is_dropped() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "  a\n b \n\n", ""));
            let value = git(&runner)
                .get_global_config_value(&key("x.y"), None)
                .unwrap();
            assert_eq!(value, ConfigValue::Set("  a\n b \n".into()));
        }

        #[test]
        fn crlf_terminator_is_dropped() {
            assert_eq!(strip_line_terminator("v\r\n".into()), "v");
            assert_eq!(strip_line_terminator("v\r".into()), "v\r");
            assert_eq!(strip_line_terminator("v".into()), "v");
        }

        #[test]
        fn exit_one_with_stderr_is_failure() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                1,
                "",
                "error: invalid key: core.ba re\n",
            ));
            let err = git(&runner)
                .get_config_value(&Repository::new("/repo"), &key("core.bare"))
                .unwrap_err();
            assert!(err.is_process_failure());
            assert_eq!(err.exit_code(), Some(1));
            assert!(err.to_string().contains("invalid key"));
        }

        #[test]
        fn get_all_exit_one_with_stderr_is_failure() {
            let runner =
                MockRunner::new().respond(ProcessOutput::new(1, "", "error: invalid key\n"));
            let err = git(&runner)
                .get_all_global_config_values(&key("a.b"), None)
                .unwrap_err();
            assert_eq!(err.exit_code(), Some(1));
        }

        #[test]
        fn other_exit_codes_are_failures() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                3,
                "",
                "error: invalid config file\n",
            ));
            let err = git(&runner)
                .get_config_value(&Repository::new("/repo"), &key("core.bare"))
                .unwrap_err();
            assert!(err.is_process_failure());
            assert_eq!(err.exit_code(), Some(3));
            assert!(err.to_string().contains("invalid config file"));
        }

        #[test]
        fn timeout_is_failure_not_absent() {
            let runner = MockRunner::new().fail_with(MockResponse::TimedOut(Duration::from_secs(1)));
            let err = git(&runner)
                .get_config_value(&Repository::new("/repo"), &key("core.bare"))
                .unwrap_err();
            assert!(matches!(
                err,
                GitConfigError::Process {
                    source: ProcessError::TimedOut { .. },
                    ..
                }
            ));
        }

        #[test]
        fn spawn_failure_carries_args() {
            let runner = MockRunner::new().fail_with(MockResponse::SpawnFailure);
            let err = git(&runner)
                .get_global_config_value(&key("user.name"), None)
                .unwrap_err();
            match err {
                GitConfigError::Process { args, .. } => {
                    assert_eq!(args, vec!["config", "--global", "--get", "user.name"]);
                }
                other => panic!("expected process error, got {other:?}"),
            }
        }

        #[test]
        fn global_read_uses_override_and_global_cwd() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "v\n", ""));
            let env = EnvOverride::home("/tmp/h");
            git(&runner)
                .get_global_config_value(&key("foo.bar"), Some(&env))
                .unwrap();

            let req = &runner.requests()[0];
            assert_eq!(req.args, vec!["config", "--global", "--get", "foo.bar"]);
            assert_eq!(req.cwd, PathBuf::from("/global"));
            assert_eq!(req.env.as_ref(), Some(&env));
        }

        #[test]
        fn get_all_splits_nul_separated_values() {
            let runner =
                MockRunner::new().respond(ProcessOutput::new(0, "first\0sec\nond\0", ""));
            let values = git(&runner)
                .get_all_global_config_values(&key("foo.bar"), None)
                .unwrap();
            assert_eq!(values, vec!["first", "sec\nond"]);
            assert_eq!(
                runner.requests()[0].args,
                vec!["config", "--global", "-z", "--get-all", "foo.bar"]
            );
        }

        #[test]
        fn get_all_keeps_empty_values() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "\0x\0", ""));
            let values = git(&runner)
                .get_all_config_values(&Repository::new("/r"), &key("a.b"))
                .unwrap();
            assert_eq!(values, vec!["", "x"]);
        }

        #[test]
        fn get_all_of_absent_key_is_empty() {
            let runner = MockRunner::new().respond(ProcessOutput::new(1, "", ""));
            let values = git(&runner)
                .get_all_config_values(&Repository::new("/r"), &key("a.b"))
                .unwrap();
            assert!(values.is_empty());
        }

        #[test]
        fn boolean_values() {
            let runner = MockRunner::new()
                .respond(ProcessOutput::new(0, "true\n", ""))
                .respond(ProcessOutput::new(0, "false\n", ""))
                .respond(ProcessOutput::new(1, "", ""));
            let git = git(&runner);
            let repo = Repository::new("/r");

            assert_eq!(git.get_boolean_config_value(&repo, &key("core.bare")).unwrap(), Some(true));
            assert_eq!(git.get_boolean_config_value(&repo, &key("core.bare")).unwrap(), Some(false));
            assert_eq!(git.get_boolean_config_value(&repo, &key("core.bare")).unwrap(), None);
            assert_eq!(
                runner.requests()[0].args,
                vec!["config", "--local", "--type=bool", "--get", "core.bare"]
            );
        }

        #[test]
        fn non_boolean_value_is_failure() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                128,
                "",
                "fatal: bad boolean config value 'maybe' for 'a.b'\n",
            ));
            let err = git(&runner)
                .get_global_boolean_config_value(&key("a.b"), None)
                .unwrap_err();
            assert_eq!(err.exit_code(), Some(128));
        }
    }

    mod locator {
        use super::*;

        #[test]
        fn reports_origin_of_first_entry() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                0,
                "file:/tmp/h/.gitconfig\0user.name\0",
                "",
            ));
            let env = EnvOverride::home("/tmp/h");
            let path = git(&runner).get_global_config_path(Some(&env)).unwrap();

            assert_eq!(path, normalize_origin_path("/tmp/h/.gitconfig", None));
            assert_eq!(
                runner.requests()[0].args,
                vec!["config", "--global", "--list", "--show-origin", "--name-only", "-z"]
            );
        }

        #[test]
        fn empty_global_config_is_unresolved() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "", ""));
            let err = git(&runner).get_global_config_path(None).unwrap_err();
            assert!(matches!(err, GitConfigError::GlobalConfigUnresolved));
            assert!(!err.is_process_failure());
        }

        #[test]
        fn missing_global_file_is_unresolved() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                128,
                "",
                "fatal: unable to read config file '/tmp/h/.gitconfig': No such file or directory\n",
            ));
            let err = git(&runner).get_global_config_path(None).unwrap_err();
            assert!(matches!(err, GitConfigError::GlobalConfigUnresolved));
        }

        #[test]
        fn other_failures_are_process_failures() {
            let runner =
                MockRunner::new().respond(ProcessOutput::new(128, "", "fatal: bad config line 3\n"));
            let err = git(&runner).get_global_config_path(None).unwrap_err();
            assert!(err.is_process_failure());
        }

        #[test]
        fn non_file_origin_is_malformed() {
            let runner =
                MockRunner::new().respond(ProcessOutput::new(0, "command line:\0a.b\0", ""));
            let err = git(&runner).get_global_config_path(None).unwrap_err();
            assert!(matches!(err, GitConfigError::MalformedOutput { .. }));
        }
    }

    mod writer {
        use super::*;

        #[test]
        fn set_global_issues_single_replace_all() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "", ""));
            let env = EnvOverride::home("/tmp/h");
            git(&runner)
                .set_global_config_value(&key("foo.bar"), "the correct value", Some(&env))
                .unwrap();

            let requests = runner.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(
                requests[0].args,
                vec!["config", "--global", "--replace-all", "foo.bar", "the correct value"]
            );
            assert_eq!(requests[0].env.as_ref(), Some(&env));
        }

        #[test]
        fn set_local_runs_in_repository() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "", ""));
            git(&runner)
                .set_config_value(&Repository::new("/repo"), &key("core.editor"), "vim")
                .unwrap();

            let req = &runner.requests()[0];
            assert_eq!(
                req.args,
                vec!["config", "--local", "--replace-all", "core.editor", "vim"]
            );
            assert_eq!(req.cwd, PathBuf::from("/repo"));
        }

        #[test]
        fn add_appends() {
            let runner = MockRunner::new().respond(ProcessOutput::new(0, "", ""));
            git(&runner)
                .add_global_config_value(&key("foo.bar"), "first", None)
                .unwrap();
            assert_eq!(
                runner.requests()[0].args,
                vec!["config", "--global", "--add", "foo.bar", "first"]
            );
        }

        #[test]
        fn write_failure_propagates() {
            let runner = MockRunner::new().respond(ProcessOutput::new(
                4,
                "",
                "error: could not lock config file /tmp/h/.gitconfig: File exists\n",
            ));
            let err = git(&runner)
                .set_global_config_value(&key("foo.bar"), "v", None)
                .unwrap_err();
            assert_eq!(err.exit_code(), Some(4));
            assert!(err.to_string().contains("could not lock"));
        }

        #[test]
        fn exit_one_on_write_is_failure() {
            let runner = MockRunner::new().respond(ProcessOutput::new(1, "", "error: invalid key\n"));
            let err = git(&runner)
                .set_global_config_value(&key("foo.bar"), "v", None)
                .unwrap_err();
            assert!(err.is_process_failure());
        }
    }

    #[test]
    fn cwd_follows_target() {
        let runner = MockRunner::new();
        let git = git(&runner);
        let repo = Repository::new("/repo");
        let env = EnvOverride::home("/tmp/h");

        assert_eq!(git.cwd(Target::Local(&repo)), Path::new("/repo"));
        assert_eq!(git.cwd(Target::Global(Some(&env))), Path::new("/global"));
    }

    #[test]
    fn target_reports_scope() {
        let repo = Repository::new("/r");
        assert_eq!(Target::Local(&repo).scope(), ConfigScope::Local);
        assert_eq!(Target::Global(None).scope(), ConfigScope::Global);
    }
}
