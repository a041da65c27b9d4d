//! Review-comments command.

use anyhow::{Context, Result};
use clap::Args;
use loglens_config::Config;
use loglens_core::ReviewSummary;

use super::{RemoteTarget, Target, remote_analyzer};

/// Arguments for the review-comments command.
#[derive(Debug, Args)]
pub struct ReviewCommentsArgs {
    #[command(flatten)]
    pub target: RemoteTarget,
}

/// Runs the review-comments command.
pub fn run(args: &ReviewCommentsArgs, config: &Config) -> Result<()> {
    let analyzer = remote_analyzer(config)?;

    let comments = match args.target.resolve()? {
        Target::Project(project_id) => analyzer
            .review_comment_table(project_id)
            .with_context(|| format!("failed to collect review comments of project {project_id}"))?
            .into_rows(),
        Target::Group(group_id) => analyzer
            .review_comments_under(group_id)
            .with_context(|| format!("failed to collect review comments of group {group_id}"))?,
    };

    print!("{}", ReviewSummary::from_comments(&comments));
    Ok(())
}
