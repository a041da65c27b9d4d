//! Record types for Loglens.
//!
//! This crate provides the tabular row types produced by both extraction
//! pipelines:
//! - [`FileChangeRecord`]: one file touched by one local commit
//! - [`CommitSummary`]: one non-merge commit reported by the hosting API
//! - [`ReviewComment`]: one reviewer note on a merge request
//!
//! Rows that can be cached implement [`Timestamped`], which provides the
//! watermark used for incremental refresh.

mod change;
mod commit;
mod review;
mod timestamp;

pub use change::FileChangeRecord;
pub use commit::CommitSummary;
pub use review::ReviewComment;
pub use timestamp::{GIT_ISO_DATE_FORMAT, Timestamp, Timestamped, parse_git_date, watermark};
