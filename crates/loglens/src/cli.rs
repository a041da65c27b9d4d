//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loglens_config::Config;

use crate::commands;

/// Change statistics from local git history and GitLab merge request reviews.
#[derive(Debug, Parser)]
#[command(name = "loglens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: nearest loglens.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize file changes of local repositories
    CreateReport(commands::create_report::CreateReportArgs),

    /// Collect reviewer comments on merged merge requests
    ReviewComments(commands::review_comments::ReviewCommentsArgs),

    /// Collect commit line statistics
    Commits(commands::commits::CommitsArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::CreateReport(args) => commands::create_report::run(args),
            Commands::ReviewComments(args) => {
                commands::review_comments::run(args, &self.load_config()?)
            }
            Commands::Commits(args) => commands::commits::run(args, &self.load_config()?),
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => loglens_config::load_config(path)
                .with_context(|| format!("failed to load {}", path.display())),
            None => loglens_config::find_and_load_config().context("failed to load configuration"),
        }
    }
}
