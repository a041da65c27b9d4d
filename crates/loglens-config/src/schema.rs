//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitLab connection settings.
    #[serde(default)]
    pub gitlab: GitlabConfig,

    /// Cache directories.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Commit extraction settings.
    #[serde(default)]
    pub commits: CommitsConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.gitlab.url.trim().is_empty() {
            return Err(ConfigError::Invalid("gitlab.url must not be empty".to_string()));
        }
        if self.gitlab.per_page == 0 {
            return Err(ConfigError::Invalid(
                "gitlab.per_page must be at least 1".to_string(),
            ));
        }
        if self.gitlab.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "gitlab.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.commits.ref_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "commits.ref_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// GitLab connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitlabConfig {
    /// Base URL of the GitLab instance.
    #[serde(default = "default_url")]
    pub url: String,

    /// Name of the environment variable holding the private token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Page size for listings.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitlabConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            token_env: default_token_env(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    "https://gitlab.com".to_string()
}

fn default_token_env() -> String {
    "GITLAB_TOKEN".to_string()
}

fn default_per_page() -> u32 {
    50
}

fn default_timeout_secs() -> u64 {
    30
}

/// Cache directories, one per cached entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory for cached review comment tables.
    #[serde(default = "default_review_comments_dir")]
    pub review_comments_dir: String,

    /// Directory for cached commit summary tables.
    #[serde(default = "default_commits_dir")]
    pub commits_dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            review_comments_dir: default_review_comments_dir(),
            commits_dir: default_commits_dir(),
        }
    }
}

fn default_review_comments_dir() -> String {
    "data/git-lab/mr-comments".to_string()
}

fn default_commits_dir() -> String {
    "data/git-lab/commits".to_string()
}

/// Commit extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitsConfig {
    /// Branch whose commits are summarized.
    #[serde(default = "default_ref_name")]
    pub ref_name: String,
}

impl Default for CommitsConfig {
    fn default() -> Self {
        Self {
            ref_name: default_ref_name(),
        }
    }
}

fn default_ref_name() -> String {
    "develop".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gitlab.url, "https://gitlab.com");
        assert_eq!(config.gitlab.token_env, "GITLAB_TOKEN");
        assert_eq!(config.gitlab.per_page, 50);
        assert_eq!(config.gitlab.timeout_secs, 30);
        assert_eq!(config.cache.review_comments_dir, "data/git-lab/mr-comments");
        assert_eq!(config.cache.commits_dir, "data/git-lab/commits");
        assert_eq!(config.commits.ref_name, "develop");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gitlab]
            url = "https://git.example.com"
        "#,
        )
        .unwrap();

        assert_eq!(config.gitlab.url, "https://git.example.com");
        assert_eq!(config.gitlab.per_page, 50);
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn test_default_config_renders_every_section() {
        let rendered = toml::to_string(&Config::default()).unwrap();
        assert!(rendered.contains("[gitlab]"));
        assert!(rendered.contains("[cache]"));
        assert!(rendered.contains("[commits]"));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_validate_rejects_zero_per_page() {
        let mut config = Config::default();
        config.gitlab.per_page = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_ref_name() {
        let mut config = Config::default();
        config.commits.ref_name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.gitlab.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
