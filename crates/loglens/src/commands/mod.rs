//! Subcommand implementations.

pub mod commits;
pub mod create_report;
pub mod review_comments;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use loglens_cache::CacheStore;
use loglens_config::Config;
use loglens_core::RemoteAnalyzer;
use loglens_gitlab::GitlabClient;
use tracing::warn;

/// Project or group selection shared by the remote commands.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct RemoteTarget {
    /// Project id or full path (e.g. `team/app`)
    #[arg(long)]
    pub project: Option<String>,

    /// Group id or full path; every project of the group is visited
    #[arg(long)]
    pub group: Option<String>,
}

/// A resolved [`RemoteTarget`].
pub enum Target<'a> {
    Project(&'a str),
    Group(&'a str),
}

impl RemoteTarget {
    /// Returns the selected project or group.
    pub fn resolve(&self) -> Result<Target<'_>> {
        match (&self.project, &self.group) {
            (Some(project), None) => Ok(Target::Project(project)),
            (None, Some(group)) => Ok(Target::Group(group)),
            _ => bail!("exactly one of --project or --group is required"),
        }
    }
}

/// Builds an analyzer talking to the configured GitLab instance.
pub fn remote_analyzer(config: &Config) -> Result<RemoteAnalyzer<GitlabClient>> {
    let gitlab = &config.gitlab;
    let mut client = GitlabClient::new(&gitlab.url, Duration::from_secs(gitlab.timeout_secs))
        .with_context(|| format!("failed to create client for {}", gitlab.url))?
        .with_per_page(gitlab.per_page);

    match std::env::var(&gitlab.token_env) {
        Ok(token) if !token.is_empty() => client = client.with_token(token),
        _ => warn!(env = %gitlab.token_env, "no access token set, sending anonymous requests"),
    }

    Ok(RemoteAnalyzer::new(
        client,
        CacheStore::new(&config.cache.review_comments_dir),
        CacheStore::new(&config.cache.commits_dir),
    )
    .with_ref_name(&config.commits.ref_name))
}
