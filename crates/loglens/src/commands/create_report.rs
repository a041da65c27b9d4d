//! Create-report command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use loglens_core::LocalReport;

/// Arguments for the create-report command.
#[derive(Debug, Args)]
pub struct CreateReportArgs {
    /// Repository path, or base directory with `--under`
    #[arg(long)]
    pub path: PathBuf,

    /// Treat the path as a directory of repositories
    #[arg(long)]
    pub under: bool,
}

/// Runs the create-report command.
pub fn run(args: &CreateReportArgs) -> Result<()> {
    let report = if args.under {
        LocalReport::for_repositories_under(&args.path)
            .with_context(|| format!("failed to scan {}", args.path.display()))?
    } else {
        LocalReport::for_repository(&args.path)
    };

    print!("{report}");
    Ok(())
}
