//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// `git log` exited unsuccessfully.
    #[error("git log failed in {path}: {stderr}")]
    LogFailed {
        path: std::path::PathBuf,
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_log_failed_display() {
        let err = GitError::LogFailed {
            path: PathBuf::from("/tmp/repo"),
            stderr: "fatal: bad default revision 'HEAD'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git log failed in /tmp/repo: fatal: bad default revision 'HEAD'"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = GitError::NotARepo(PathBuf::from("/tmp"));
        let debug = format!("{err:?}");
        assert!(debug.contains("NotARepo"));
    }
}
