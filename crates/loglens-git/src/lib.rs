//! Local git log extraction for Loglens.
//!
//! This crate provides:
//! - Repository access and `git log --numstat` invocation
//! - Parsing of per-commit numstat blocks into [`FileChangeRecord`]s
//! - Aggregation over one repository or a directory of repositories
//! - A time-indexed, sorted [`ChangeTable`]
//!
//! [`FileChangeRecord`]: loglens_records::FileChangeRecord

mod aggregator;
mod error;
mod log_parser;
mod repository;
mod table;

pub use aggregator::{commit_log_records_in, commit_log_records_under, records_from_log};
pub use error::{GitError, GitResult};
pub use log_parser::{COMMIT_DELIMITER, CommitHeader, parse_block, parse_header};
pub use repository::Repository;
pub use table::{AuthorSummary, ChangeRow, ChangeTable, PeriodSummary, TimeKey};
