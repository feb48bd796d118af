//! git::origin
//!
//! Parsing of `git config --show-origin -z` output and normalization of the
//! reported file paths.

use std::path::{Component, Path, PathBuf};

use crate::core::types::EnvOverride;

/// Origin of the first entry in NUL-delimited `--show-origin` output.
///
/// This is the first file git read for the scope, which is not necessarily
/// the one it writes: when both `$XDG_CONFIG_HOME/git/config` and
/// `~/.gitconfig` exist, git lists the XDG file first but `--global`
/// writes go to `~/.gitconfig`.
///
/// Returns `None` when the output holds no entries. The first token is
/// the origin for both `--name-only` (`origin\0key\0`) and full
/// (`origin\0key\nvalue\0`) listings.
pub(crate) fn first_origin(stdout: &str) -> Option<&str> {
    stdout.split('\0').next().filter(|origin| !origin.is_empty())
}

/// Strip the `file:` origin type, leaving the path git read from.
///
/// Other origin types (`blob:`, `command line:`, `standard input:`) have no
/// file on disk and yield `None`.
pub(crate) fn origin_file(origin: &str) -> Option<&str> {
    origin.strip_prefix("file:").filter(|path| !path.is_empty())
}

/// Normalize a path reported by git for the current platform.
///
/// A leading `~` is expanded against the override's `HOME` when present,
/// otherwise against the invoking user's home directory. `.` and `..`
/// components are then resolved lexically, without touching the filesystem.
pub(crate) fn normalize_origin_path(raw: &str, env: Option<&EnvOverride>) -> PathBuf {
    let override_home = env.and_then(|e| e.get("HOME")).map(str::to_owned);
    let expanded = shellexpand::tilde_with_context(raw, || {
        override_home.or_else(|| dirs::home_dir().map(|h| h.to_string_lossy().into_owned()))
    });
    normalize_lexically(Path::new(expanded.as_ref()))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
