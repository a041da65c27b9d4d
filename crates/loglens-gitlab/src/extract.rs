//! Extraction of review comments and commit summaries.

use loglens_records::{CommitSummary, ReviewComment, Timestamp};
use tracing::{debug, info};

use crate::api::{Commits, Discussions, GroupProjects, MergeRequests, Subgroups};
use crate::model::{Group, MergeRequest, Project};
use crate::{GitlabResult, HostingApi, ListParams, fetch_all};

/// Returns every direct subgroup of a group.
///
/// # Errors
///
/// Returns an error if any page request fails.
pub fn all_subgroups_under<A: HostingApi + ?Sized>(
    api: &A,
    group_id: &str,
    params: &ListParams,
) -> GitlabResult<Vec<Group>> {
    fetch_all(&Subgroups { api, group_id }, params)
}

/// Returns every project of a group.
///
/// # Errors
///
/// Returns an error if any page request fails.
pub fn all_projects_under<A: HostingApi + ?Sized>(
    api: &A,
    group_id: &str,
    params: &ListParams,
) -> GitlabResult<Vec<Project>> {
    fetch_all(&GroupProjects { api, group_id }, params)
}

/// Returns every merge request of a project matching `params`.
///
/// # Errors
///
/// Returns an error if any page request fails.
pub fn all_merge_requests_under<A: HostingApi + ?Sized>(
    api: &A,
    project_id: &str,
    params: &ListParams,
) -> GitlabResult<Vec<MergeRequest>> {
    fetch_all(&MergeRequests { api, project_id }, params)
}

/// Returns the reviewer comments on a merge request.
///
/// Only threaded discussions are considered. Notes written by the merge
/// request author and system notes are dropped.
///
/// # Errors
///
/// Returns an error if the discussions cannot be fetched.
pub fn review_comments<A: HostingApi + ?Sized>(
    api: &A,
    merge_request: &MergeRequest,
    project_name: &str,
) -> GitlabResult<Vec<ReviewComment>> {
    let author_id = merge_request.author.id;
    let discussions = fetch_all(
        &Discussions {
            api,
            project_id: merge_request.project_id,
            merge_request_iid: merge_request.iid,
        },
        &ListParams::new(),
    )?;

    let comments = discussions
        .into_iter()
        .filter(|discussion| !discussion.individual_note)
        .flat_map(|discussion| discussion.notes)
        .filter(|note| note.author.id != author_id && !note.system)
        .map(|note| ReviewComment {
            created_at: note.created_at,
            project_name: project_name.to_string(),
            author_id,
            reviewer_id: note.author.id,
            resolvable: note.resolvable,
            body: note.body.trim().to_string(),
        })
        .collect::<Vec<_>>();

    debug!(
        iid = merge_request.iid,
        comments = comments.len(),
        "extracted review comments"
    );
    Ok(comments)
}

/// Returns the reviewer comments on every merged merge request of a project.
///
/// Merge requests are listed by last update; with `created_after`, only
/// merge requests created after that time are visited.
///
/// # Errors
///
/// Returns an error if any request fails.
pub fn review_comments_in<A: HostingApi + ?Sized>(
    api: &A,
    project_id: &str,
    created_after: Option<Timestamp>,
) -> GitlabResult<Vec<ReviewComment>> {
    let project = api.project(project_id)?;
    info!(project = %project.name, ?created_after, "extracting review comments");

    let params = ListParams::new()
        .state("merged")
        .order_by("updated_at")
        .created_after(created_after);
    let merge_requests = all_merge_requests_under(api, project_id, &params)?;

    let mut comments = Vec::new();
    for merge_request in &merge_requests {
        comments.extend(review_comments(api, merge_request, &project.name)?);
    }
    Ok(comments)
}

/// Returns summaries of the non-merge commits on a branch of a project.
///
/// With `since`, only commits from that time on are listed.
///
/// # Errors
///
/// Returns an error if any request fails.
pub fn commit_summaries_in<A: HostingApi + ?Sized>(
    api: &A,
    project_id: &str,
    ref_name: &str,
    since: Option<Timestamp>,
) -> GitlabResult<Vec<CommitSummary>> {
    let project = api.project(project_id)?;
    info!(project = %project.name, ref_name, ?since, "extracting commits");

    let params = ListParams::new()
        .ref_name(ref_name)
        .with_stats(true)
        .since(since);
    let commits = fetch_all(&Commits { api, project_id }, &params)?;

    Ok(commits
        .into_iter()
        .filter(|commit| CommitSummary::is_summarizable(&commit.message))
        .map(|commit| {
            let stats = commit.stats.unwrap_or_default();
            CommitSummary {
                project_name: project.name.clone(),
                author_name: commit.author_name,
                created_at: commit.created_at,
                additions: stats.additions,
                deletions: stats.deletions,
                total: stats.total,
                message: commit.message,
            }
        })
        .collect())
}
