//! core::repository
//!
//! Repository handle consumed by the local-scope operations.
//!
//! Only the working directory matters here: local reads and writes run git
//! with that directory as the child's cwd, and git discovers `.git/config`
//! from there.

use std::path::{Path, PathBuf};

/// Anything that can name a repository working directory.
pub trait RepositoryHandle {
    /// Directory git should run in for local-scope operations.
    fn working_dir(&self) -> &Path;
}

/// A repository identified by its working-directory path.
///
/// # Example
///
/// ```
/// use gitconf::core::repository::{Repository, RepositoryHandle};
///
/// let repo = Repository::new("/src/project");
/// assert_eq!(repo.working_dir().to_str(), Some("/src/project"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RepositoryHandle for Repository {
    fn working_dir(&self) -> &Path {
        &self.path
    }
}

impl RepositoryHandle for Path {
    fn working_dir(&self) -> &Path {
        self
    }
}

impl RepositoryHandle for PathBuf {
    fn working_dir(&self) -> &Path {
        self.as_path()
    }
}

impl<T: RepositoryHandle + ?Sized> RepositoryHandle for &T {
    fn working_dir(&self) -> &Path {
        (**self).working_dir()
    }
}
