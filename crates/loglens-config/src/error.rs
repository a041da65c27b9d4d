//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/loglens.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /path/to/loglens.toml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("per_page must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: per_page must be positive"
        );
    }
}
