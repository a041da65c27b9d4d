//! Commit summary reported by the hosting API.

use serde::{Deserialize, Serialize};

use crate::{Timestamp, Timestamped};

/// Marker that identifies merge commits by message.
const MERGE_MARKER: &str = "Merge";

/// One non-merge commit, aggregated across files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// Display name of the owning project.
    pub project_name: String,

    /// Commit author name.
    pub author_name: String,

    /// Commit creation time.
    pub created_at: Timestamp,

    /// Added lines.
    pub additions: u64,

    /// Removed lines.
    pub deletions: u64,

    /// Total changed lines as reported by the API.
    pub total: u64,

    /// Full commit message.
    pub message: String,
}

impl CommitSummary {
    /// Returns true if a commit with this message should be summarized.
    ///
    /// Any message containing `Merge` is treated as a merge commit.
    #[must_use]
    pub fn is_summarizable(message: &str) -> bool {
        !message.contains(MERGE_MARKER)
    }
}

impl Timestamped for CommitSummary {
    fn timestamp(&self) -> Timestamp {
        self.created_at
    }
}
