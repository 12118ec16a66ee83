//! Paginated, searchable list screens.
//!
//! DESIGN
//! ======
//! Every fetch is stamped with a sequence number when it is issued. Only the
//! response carrying the most recently issued number is applied; anything
//! older is dropped, so a slow page-1 response can never overwrite the page-3
//! results the user is now looking at.
//!
//! Deletion is two-step. `request_delete` only records the id; the service is
//! called from `confirm_delete`, after which the list is refetched rather
//! than edited in place.

use models::{ListQuery, Paginated, Pagination};
use tracing::debug;

use crate::error::ApiError;
use crate::services::{Resource, ResourceService};

/// A fetch that has been issued but not yet applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket<Q> {
    pub seq: u64,
    pub query: Q,
}

pub struct ListView<R: Resource> {
    query: R::Query,
    items: Vec<R::Item>,
    total_pages: u32,
    total_count: u64,
    loading: bool,
    error: Option<String>,
    issued: u64,
    pending_delete: Option<String>,
}

impl<R: Resource> ListView<R> {
    /// Empty view on page 1 with `limit` rows per page.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        let mut query = R::Query::default();
        query.set_limit(limit);
        Self::with_query(query)
    }

    /// View opened directly on `query`, e.g. a bookmarked page with filters.
    /// The page is not clamped until the first response reports a count.
    #[must_use]
    pub fn with_query(query: R::Query) -> Self {
        Self {
            query,
            items: Vec::new(),
            total_pages: 1,
            total_count: 0,
            loading: true,
            error: None,
            issued: 0,
            pending_delete: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    #[must_use]
    pub fn query(&self) -> &R::Query {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.query.page()
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Page metadata as last reported, on the current page.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination {
            total: self.total_count,
            pages: self.total_pages,
            page: self.query.page(),
            limit: self.query.limit(),
        }
    }

    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.query.search()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Issue a new fetch for the current query. Any fetch issued before this
    /// one becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket<R::Query> {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        FetchTicket { seq: self.issued, query: self.query.clone() }
    }

    /// Apply the outcome of fetch `seq`. Returns `false` (and changes
    /// nothing) when a newer fetch has been issued since.
    pub fn apply(&mut self, seq: u64, result: Result<Paginated<R::Item>, ApiError>) -> bool {
        if seq != self.issued {
            debug!(seq, latest = self.issued, "{}: dropping stale list response", R::PLURAL);
            return false;
        }
        match result {
            Ok(page) => {
                self.items = page.data;
                self.total_pages = page.pagination.pages.max(1);
                self.total_count = page.pagination.total;
            }
            Err(e) => {
                debug!(error = %e, "{}: list fetch failed", R::PLURAL);
                self.error = Some(format!("Failed to load {}", R::PLURAL));
            }
        }
        self.loading = false;
        true
    }

    /// Fetch the current query and apply the result.
    pub async fn refresh(&mut self, service: &ResourceService<R>) {
        let ticket = self.begin_fetch();
        let result = service.list(&ticket.query).await;
        self.apply(ticket.seq, result);
    }

    // -------------------------------------------------------------------------
    // Query changes. Callers refresh afterwards.
    // -------------------------------------------------------------------------

    /// Move to `page`, clamped to the known page count. Returns `true` when
    /// the page actually changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.query.page() {
            return false;
        }
        self.query.set_page(page);
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.query.page().saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.query.page().saturating_sub(1))
    }

    /// Commit the search box. Blank input clears the search. Always returns
    /// to page 1.
    pub fn submit_search(&mut self, term: &str) {
        self.query.set_search(Some(term.to_owned()));
        self.query.set_page(1);
    }

    /// Change entity-specific filters (status, tag, role, active). Always
    /// returns to page 1.
    pub fn set_filter(&mut self, update: impl FnOnce(&mut R::Query)) {
        update(&mut self.query);
        self.query.set_page(1);
    }

    // -------------------------------------------------------------------------
    // Deletion
    // -------------------------------------------------------------------------

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending record and refetch. Returns `true` when a record
    /// was deleted. Without a pending request nothing is sent.
    pub async fn confirm_delete(&mut self, service: &ResourceService<R>) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        let result = service.delete(&id).await;
        match result {
            Ok(()) => {
                self.refresh(service).await;
                true
            }
            Err(e) => {
                self.error = Some(e.user_message(&format!("Failed to delete {}", R::NOUN)));
                false
            }
        }
    }
}

impl<R: Resource> std::fmt::Debug for ListView<R>
where
    R::Query: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListView")
            .field("query", &self.query)
            .field("items", &self.items.len())
            .field("total_pages", &self.total_pages)
            .field("total_count", &self.total_count)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("pending_delete", &self.pending_delete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
