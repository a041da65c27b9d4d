//! Per-file change record parsed from local `git log --numstat` output.

use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// One file touched by one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeRecord {
    /// Name of the repository directory the commit belongs to.
    pub project_name: String,

    /// Commit author, unset when the commit header could not be parsed.
    pub author: Option<String>,

    /// Commit date as printed by git, unset when the header could not be parsed.
    pub raw_date: Option<String>,

    /// Parsed commit date.
    pub date: Option<Timestamp>,

    /// Added lines (0 for binary files).
    pub plus_line_count: u64,

    /// Removed lines (0 for binary files).
    pub minus_line_count: u64,

    /// Path of the changed file.
    pub file: String,
}

impl FileChangeRecord {
    /// Returns the number of changed lines (added plus removed).
    #[must_use]
    pub fn total_line_count(&self) -> u64 {
        self.plus_line_count + self.minus_line_count
    }

    /// Returns the author, or an empty string when unset.
    #[must_use]
    pub fn author_or_empty(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }
}
