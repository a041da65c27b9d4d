//! Fetch-until-empty-page walking of paginated listings.

use loglens_records::Timestamp;
use tracing::trace;

use crate::GitlabResult;

/// Filters applied to every page request of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Resource state (e.g. `merged`).
    pub state: Option<String>,
    /// Sort field (e.g. `updated_at`).
    pub order_by: Option<String>,
    /// Only resources created after this time.
    pub created_after: Option<Timestamp>,
    /// Branch or tag name for commit listings.
    pub ref_name: Option<String>,
    /// Only commits created at or after this time.
    pub since: Option<Timestamp>,
    /// Include line statistics in commit listings.
    pub with_stats: bool,
    /// Page size; the client default applies when unset.
    pub per_page: Option<u32>,
}

impl ListParams {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state filter.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Sets the creation time lower bound.
    #[must_use]
    pub fn created_after(mut self, created_after: Option<Timestamp>) -> Self {
        self.created_after = created_after;
        self
    }

    /// Sets the branch or tag name.
    #[must_use]
    pub fn ref_name(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }

    /// Sets the commit time lower bound.
    #[must_use]
    pub fn since(mut self, since: Option<Timestamp>) -> Self {
        self.since = since;
        self
    }

    /// Requests commit line statistics.
    #[must_use]
    pub fn with_stats(mut self, with_stats: bool) -> Self {
        self.with_stats = with_stats;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Renders the filters as query parameters, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(state) = &self.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by", order_by.clone()));
        }
        if let Some(created_after) = &self.created_after {
            pairs.push(("created_after", created_after.to_rfc3339()));
        }
        if let Some(ref_name) = &self.ref_name {
            pairs.push(("ref_name", ref_name.clone()));
        }
        if let Some(since) = &self.since {
            pairs.push(("since", since.to_rfc3339()));
        }
        if self.with_stats {
            pairs.push(("with_stats", "true".to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

/// A listing that can be fetched one page at a time.
pub trait Paginated {
    /// The listed resource.
    type Item;

    /// Fetches one page (1-based) of the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched.
    fn fetch_page(&self, page: u32, params: &ListParams) -> GitlabResult<Vec<Self::Item>>;
}

/// Fetches every page of a listing, starting at page 1, until a page comes back empty.
///
/// # Errors
///
/// Returns the first page error; items fetched so far are discarded.
pub fn fetch_all<P>(listing: &P, params: &ListParams) -> GitlabResult<Vec<P::Item>>
where
    P: Paginated + ?Sized,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let batch = listing.fetch_page(page, params)?;
        trace!(page, count = batch.len(), "fetched page");
        if batch.is_empty() {
            break;
        }
        items.extend(batch);
        page += 1;
    }

    Ok(items)
}
