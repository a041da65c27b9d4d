//! GitLab extraction for Loglens.
//!
//! This crate handles:
//! - The [`HostingApi`] seam over the GitLab v4 REST API and its blocking
//!   HTTP implementation, [`GitlabClient`]
//! - Fetch-until-empty-page walking of paginated listings ([`Paginated`])
//! - Extraction of reviewer comments and commit summaries

pub mod api;
pub mod client;
pub mod error;
pub mod extract;
pub mod model;
pub mod pagination;

pub use api::{
    Commits, Discussions, GroupProjects, HostingApi, MergeRequests, Subgroups,
};
pub use client::GitlabClient;
pub use error::{GitlabError, GitlabResult};
pub use extract::{
    all_merge_requests_under, all_projects_under, all_subgroups_under, commit_summaries_in,
    review_comments, review_comments_in,
};
pub use model::{Commit, CommitStats, Discussion, Group, MergeRequest, Note, Project, UserRef};
pub use pagination::{ListParams, Paginated, fetch_all};
