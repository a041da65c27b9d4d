//! GitLab API response types.
//!
//! Only the fields the extractors read are modeled; everything else in the
//! JSON payloads is ignored.

use loglens_records::Timestamp;
use serde::Deserialize;

/// A user reference embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRef {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// A group or subgroup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_path: String,
}

/// A project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u64,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub path_with_namespace: String,
}

/// A merge request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    pub id: u64,
    /// Project-scoped id used in URLs.
    pub iid: u64,
    pub project_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
    pub author: UserRef,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A discussion on a merge request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discussion {
    pub id: String,
    /// True for a standalone note that is not part of a thread.
    #[serde(default)]
    pub individual_note: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A note within a discussion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    pub author: UserRef,
    pub created_at: Timestamp,
    /// True for notes generated by GitLab itself (approvals, pushes, ...).
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub resolvable: bool,
}

/// A commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    pub id: String,
    #[serde(default)]
    pub author_name: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub message: String,
    /// Present only when requested with `with_stats`.
    pub stats: Option<CommitStats>,
}

/// Line statistics of a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
    pub total: u64,
}
