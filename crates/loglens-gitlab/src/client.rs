//! Blocking HTTP client for the GitLab v4 REST API.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Commit, Discussion, Group, MergeRequest, Project};
use crate::{GitlabError, GitlabResult, HostingApi, ListParams};

/// Header carrying a personal or project access token.
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Page size used when a listing does not set one.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// GitLab REST client.
pub struct GitlabClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    per_page: u32,
}

impl GitlabClient {
    /// Creates a client for the GitLab instance at `base_url` (e.g. `https://gitlab.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> GitlabResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .build()
            .map_err(|source| GitlabError::Request {
                url: base_url.to_string(),
                source,
            })?;

        Self::with_http_client(base_url, client)
    }

    /// Creates a client that sends requests through an already configured
    /// HTTP client (custom proxy, TLS roots or timeouts).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_http_client(base_url: &str, client: Client) -> GitlabResult<Self> {
        let invalid = || GitlabError::InvalidUrl {
            url: base_url.to_string(),
        };
        let parsed = Url::parse(base_url).map_err(|_| invalid())?;
        if parsed.cannot_be_a_base() {
            return Err(invalid());
        }

        Ok(Self {
            client,
            base_url: parsed,
            token: None,
            per_page: DEFAULT_PER_PAGE,
        })
    }

    /// Sets the access token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Builds the API URL for the given path segments.
    ///
    /// Each segment is percent-encoded, so full paths like `group/project`
    /// can be used as ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> GitlabResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GitlabError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "v4"])
            .extend(segments);
        Ok(url)
    }

    fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> GitlabResult<T> {
        let url = self.endpoint(segments)?;
        let url_text = url.to_string();
        debug!(url = %url_text, ?query, "GET");

        let mut request = self.client.get(url).query(query);
        if let Some(token) = &self.token {
            request = request.header(PRIVATE_TOKEN_HEADER, token.as_str());
        }

        let response = request.send().map_err(|source| GitlabError::Request {
            url: url_text.clone(),
            source,
        })?;
        let status = response.status();
        let body = response.text().map_err(|source| GitlabError::Request {
            url: url_text.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(GitlabError::Status {
                url: url_text,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| GitlabError::Decode {
            url: url_text,
            source,
        })
    }

    fn get_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<T>> {
        let mut query = params.query_pairs();
        if params.per_page.is_none() {
            query.push(("per_page", self.per_page.to_string()));
        }
        query.push(("page", page.to_string()));
        self.get(segments, &query)
    }
}

impl HostingApi for GitlabClient {
    fn group(&self, group_id: &str) -> GitlabResult<Group> {
        self.get(&["groups", group_id], &[])
    }

    fn project(&self, project_id: &str) -> GitlabResult<Project> {
        self.get(&["projects", project_id], &[])
    }

    fn subgroups_page(
        &self,
        group_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Group>> {
        self.get_page(&["groups", group_id, "subgroups"], page, params)
    }

    fn group_projects_page(
        &self,
        group_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Project>> {
        self.get_page(&["groups", group_id, "projects"], page, params)
    }

    fn merge_requests_page(
        &self,
        project_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<MergeRequest>> {
        self.get_page(&["projects", project_id, "merge_requests"], page, params)
    }

    fn discussions_page(
        &self,
        project_id: u64,
        merge_request_iid: u64,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Discussion>> {
        let project_id = project_id.to_string();
        let iid = merge_request_iid.to_string();
        self.get_page(
            &["projects", &project_id, "merge_requests", &iid, "discussions"],
            page,
            params,
        )
    }

    fn commits_page(
        &self,
        project_id: &str,
        page: u32,
        params: &ListParams,
    ) -> GitlabResult<Vec<Commit>> {
        self.get_page(
            &["projects", project_id, "repository", "commits"],
            page,
            params,
        )
    }
}
