//! Reviewer comment extracted from merge request discussions.

use serde::{Deserialize, Serialize};

use crate::{Timestamp, Timestamped};

/// One reviewer note on a merge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// When the note was created.
    pub created_at: Timestamp,

    /// Display name of the owning project.
    pub project_name: String,

    /// User id of the merge request author.
    pub author_id: u64,

    /// User id of the note author.
    pub reviewer_id: u64,

    /// Whether the note can be resolved.
    pub resolvable: bool,

    /// Note text with surrounding whitespace removed.
    pub body: String,
}

impl Timestamped for ReviewComment {
    fn timestamp(&self) -> Timestamp {
        self.created_at
    }
}
