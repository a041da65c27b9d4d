//! Git repository wrapper.

use std::path::Path;
use std::process::Command;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitError, GitResult};

/// Arguments passed to `git log` to produce per-commit numstat blocks.
const NUMSTAT_LOG_ARGS: [&str; 5] = [
    "log",
    "--numstat",
    "--date=iso",
    "--no-merges",
    // Quotes are literal and appear in the output.
    "--pretty=________\"%an__%ad\"",
];

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// The path must be the repository root; parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the name of the repository directory.
    #[must_use]
    pub fn project_name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Runs `git log` and returns the raw numstat output of all non-merge commits.
    ///
    /// Each commit starts with the delimiter followed by a quoted
    /// `author__date` header and its numstat lines.
    ///
    /// # Errors
    ///
    /// Returns an error if `git` cannot be spawned or exits unsuccessfully.
    pub fn numstat_log(&self) -> GitResult<String> {
        let path = self.path();
        debug!(?path, "running git log");

        let output = Command::new("git")
            .args(NUMSTAT_LOG_ARGS)
            .current_dir(path)
            .output()?;

        if !output.status.success() {
            return Err(GitError::LogFailed {
                path: path.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
