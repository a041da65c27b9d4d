//! Commits command.

use anyhow::{Context, Result};
use clap::Args;
use loglens_config::Config;
use loglens_core::CommitTotals;

use super::{RemoteTarget, Target, remote_analyzer};

/// Arguments for the commits command.
#[derive(Debug, Args)]
pub struct CommitsArgs {
    #[command(flatten)]
    pub target: RemoteTarget,
}

/// Runs the commits command.
pub fn run(args: &CommitsArgs, config: &Config) -> Result<()> {
    let analyzer = remote_analyzer(config)?;

    let summaries = match args.target.resolve()? {
        Target::Project(project_id) => analyzer
            .commit_summary_table(project_id)
            .with_context(|| format!("failed to collect commits of project {project_id}"))?
            .into_rows(),
        Target::Group(group_id) => analyzer
            .commit_summaries_under(group_id)
            .with_context(|| format!("failed to collect commits of group {group_id}"))?,
    };

    println!("Branch: {}", analyzer.ref_name());
    print!("{}", CommitTotals::from_summaries(&summaries));
    Ok(())
}
