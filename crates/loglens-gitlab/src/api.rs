//! The hosting API seam and its paginated listings.

use crate::model::{Commit, Discussion, Group, MergeRequest, Project};
use crate::{GitlabResult, ListParams, Paginated};

/// Read-only access to the GitLab resources the extractors need.
///
/// Group and project ids are either numeric ids or full paths
/// (`group/subgroup/project`).
pub trait HostingApi {
    /// Fetches a single group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn group(&self, group_id: &str) -> GitlabResult<Group>;

    /// Fetches a single project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn project(&self, project_id: &str) -> GitlabResult<Project>;

    /// Fetches one page of a group's direct subgroups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn subgroups_page(
        &self,
        group_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Group>>;

    /// Fetches one page of a group's projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn group_projects_page(
        &self,
        group_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Project>>;

    /// Fetches one page of a project's merge requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn merge_requests_page(
        &self,
        project_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<MergeRequest>>;

    /// Fetches one page of a merge request's discussions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn discussions_page(
        &self,
        project_id: u64,
        merge_request_iid: u64,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Discussion>>;

    /// Fetches one page of a project's commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn commits_page(
        &self,
        project_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Commit>>;
}

/// Subgroups of a group.
pub struct Subgroups<'a, A: ?Sized> {
    pub api: &'a A,
    pub group_id: &'a str,
}

impl<A: HostingApi + ?Sized> Paginated for Subgroups<'_, A> {
    type Item = Group;

    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<Group>> {
        self.api.subgroups_page(self.group_id, page, params)
    }
}

/// Projects of a group.
pub struct GroupProjects<'a, A: ?Sized> {
    pub api: &'a A,
    pub group_id: &'a str,
}

impl<A: HostingApi + ?Sized> Paginated for GroupProjects<'_, A> {
    type Item = Project;

    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<Project>> {
        self.api.group_projects_page(self.group_id, page, params)
    }
}

/// Merge requests of a project.
pub struct MergeRequests<'a, A: ?Sized> {
    pub api: &'a A,
    pub project_id: &'a str,
}

impl<A: HostingApi + ?Sized> Paginated for MergeRequests<'_, A> {
    type Item = MergeRequest;

    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<MergeRequest>> {
        self.api.merge_requests_page(self.project_id, page, params)
    }
}

/// Discussions of a merge request.
pub struct Discussions<'a, A: ?Sized> {
    pub api: &'a A,
    pub project_id: u64,
    pub merge_request_iid: u64,
}

impl<A: HostingApi + ?Sized> Paginated for Discussions<'_, A> {
    type Item = Discussion;

    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<Discussion>> {
        self.api
            .discussions_page(self.project_id, self.merge_request_iid, page, params)
    }
}

/// Commits of a project.
pub struct Commits<'a, A: ?Sized> {
    pub api: &'a A,
    pub project_id: &'a str,
}

impl<A: HostingApi + ?Sized> Paginated for Commits<'_, A> {
    type Item = Commit;

    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<Commit>> {
        self.api.commits_page(self.project_id, page, params)
    }
}
