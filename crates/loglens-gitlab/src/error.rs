//! Error types for the GitLab client.

/// Result type for GitLab operations.
pub type GitlabResult<T> = Result<T, GitlabError>;

/// GitLab error types.
#[derive(Debug, thiserror::Error)]
pub enum GitlabError {
    /// The configured base URL cannot be used.
    #[error("invalid GitLab URL: {url}")]
    InvalidUrl { url: String },

    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("GitLab returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
