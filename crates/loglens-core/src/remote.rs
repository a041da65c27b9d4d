//! Cached extraction from a GitLab instance.

use loglens_cache::{CacheStore, CachedTable};
use loglens_gitlab::{
    HostingApi, ListParams, all_projects_under, commit_summaries_in, review_comments_in,
};
use loglens_records::{CommitSummary, ReviewComment};
use tracing::{debug, info};

use crate::{CoreError, CoreResult};

/// Branch summarized when none is configured.
const DEFAULT_REF_NAME: &str = "develop";

/// Runs the remote extractors through the per-project caches.
pub struct RemoteAnalyzer<A> {
    api: A,
    review_comments: CacheStore,
    commits: CacheStore,
    ref_name: String,
}

impl<A: HostingApi> RemoteAnalyzer<A> {
    /// Creates an analyzer caching review comments and commit summaries in
    /// the given stores.
    #[must_use]
    pub fn new(api: A, review_comments: CacheStore, commits: CacheStore) -> Self {
        Self {
            api,
            review_comments,
            commits,
            ref_name: DEFAULT_REF_NAME.to_string(),
        }
    }

    /// Sets the branch whose commits are summarized.
    #[must_use]
    pub fn with_ref_name(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = ref_name.into();
        self
    }

    /// Returns the summarized branch.
    #[must_use]
    pub fn ref_name(&self) -> &str {
        &self.ref_name
    }

    /// Returns the cached review comments of a project, refreshed with
    /// everything created after the newest cached comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API or the cache fails.
    pub fn review_comment_table(&self, project_id: &str) -> CoreResult<CachedTable<ReviewComment>> {
        self.review_comments.merge(project_id, |created_after| {
            review_comments_in(&self.api, project_id, created_after).map_err(CoreError::from)
        })
    }

    /// Returns the cached commit summaries of a project, refreshed with
    /// everything committed after the newest cached commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the API or the cache fails.
    pub fn commit_summary_table(&self, project_id: &str) -> CoreResult<CachedTable<CommitSummary>> {
        self.commits.merge(project_id, |since| {
            commit_summaries_in(&self.api, project_id, &self.ref_name, since)
                .map_err(CoreError::from)
        })
    }

    /// Returns the review comments of every project in a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the API or the cache fails for any project.
    pub fn review_comments_under(&self, group_id: &str) -> CoreResult<Vec<ReviewComment>> {
        self.union_under(group_id, |project_id| self.review_comment_table(project_id))
    }

    /// Returns the commit summaries of every project in a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the API or the cache fails for any project.
    pub fn commit_summaries_under(&self, group_id: &str) -> CoreResult<Vec<CommitSummary>> {
        self.union_under(group_id, |project_id| self.commit_summary_table(project_id))
    }

    fn union_under<R, F>(&self, group_id: &str, table_for: F) -> CoreResult<Vec<R>>
    where
        F: Fn(&str) -> CoreResult<CachedTable<R>>,
    {
        let group = self.api.group(group_id)?;
        let projects = all_projects_under(&self.api, group_id, &ListParams::new())?;
        info!(group = %group.full_path, projects = projects.len(), "collecting group");

        let mut rows = Vec::new();
        for project in &projects {
            let table = table_for(&project.id.to_string())?;
            if table.is_empty() {
                debug!(project = %project.name, "no rows, skipping");
                continue;
            }
            rows.extend(table.into_rows());
        }
        Ok(rows)
    }
}
