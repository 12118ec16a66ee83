//! Query parameters for the list endpoints.
//!
//! Filters that are unset are omitted from the query string entirely; blank
//! strings are normalized to "unset" on the way in so the backend never sees
//! `search=`.

use serde::Serialize;

use crate::status::EntityStatus;
use crate::user::Role;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Paging and free-text search shared by every list endpoint.
pub trait ListQuery: Serialize + Clone + Default + Send + Sync {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn limit(&self) -> u32;
    fn set_limit(&mut self, limit: u32);
    fn search(&self) -> Option<&str>;
    fn set_search(&mut self, search: Option<String>);
}

/// Collapse blank text to `None` and trim the rest.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn clamp_page(page: u32) -> u32 {
    page.max(DEFAULT_PAGE)
}

fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIMIT)
}

macro_rules! list_query_impl {
    ($ty:ty) => {
        impl Default for $ty {
            fn default() -> Self {
                Self::unfiltered()
            }
        }

        impl ListQuery for $ty {
            fn page(&self) -> u32 {
                self.page
            }
            fn set_page(&mut self, page: u32) {
                self.page = clamp_page(page);
            }
            fn limit(&self) -> u32 {
                self.limit
            }
            fn set_limit(&mut self, limit: u32) {
                self.limit = clamp_limit(limit);
            }
            fn search(&self) -> Option<&str> {
                self.search.as_deref()
            }
            fn set_search(&mut self, search: Option<String>) {
                self.search = non_blank(search);
            }
        }
    };
}

/// `GET /blogs` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogListParams {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl BlogListParams {
    fn unfiltered() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, status: None, tag: None, search: None }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = non_blank(tag).map(|t| t.to_lowercase());
        self
    }
}

list_query_impl!(BlogListParams);

/// `GET /case-studies` query. Same filters as blog posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseStudyListParams {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CaseStudyListParams {
    fn unfiltered() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, status: None, tag: None, search: None }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = non_blank(tag).map(|t| t.to_lowercase());
        self
    }
}

list_query_impl!(CaseStudyListParams);

/// `GET /teams` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListParams {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TeamListParams {
    fn unfiltered() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, search: None, is_active: None }
    }
}

list_query_impl!(TeamListParams);

/// `GET /users` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UserListParams {
    fn unfiltered() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, search: None, role: None, is_active: None }
    }
}

list_query_impl!(UserListParams);

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
