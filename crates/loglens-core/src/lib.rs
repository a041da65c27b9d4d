//! Core library for Loglens.
//!
//! This crate ties the extractors to the on-disk cache and renders the
//! summaries printed by the command line tool.

mod error;
mod remote;
mod report;
mod summary;

pub use error::{CoreError, CoreResult};
pub use remote::RemoteAnalyzer;
pub use report::LocalReport;
pub use summary::{AuthorTotals, CommitTotals, ReviewSummary};
