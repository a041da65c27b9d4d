//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] loglens_git::GitError),

    /// GitLab API error.
    #[error("gitlab error: {0}")]
    Gitlab(#[from] loglens_gitlab::GitlabError),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] loglens_cache::CacheError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_wraps_git_error() {
        let err: CoreError = loglens_git::GitError::NotARepo(PathBuf::from("/tmp/x")).into();
        assert!(matches!(err, CoreError::Git(_)));
        assert!(err.to_string().starts_with("git error: "));
    }

    #[test]
    fn test_wraps_gitlab_error() {
        let err: CoreError = loglens_gitlab::GitlabError::InvalidUrl {
            url: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Gitlab(_)));
        assert!(err.to_string().starts_with("gitlab error: "));
    }

    #[test]
    fn test_wraps_cache_error() {
        let err: CoreError = loglens_cache::CacheError::CreateDir {
            path: PathBuf::from("/cache"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert!(matches!(err, CoreError::Cache(_)));
        assert!(err.to_string().starts_with("cache error: "));
    }
}
