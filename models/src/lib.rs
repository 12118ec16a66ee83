//! Shared wire schema for the content console.
//!
//! This crate owns the JSON representation used by the `client`, `cli` and
//! `server` crates: entity records and their create/update payloads, list
//! query parameters, response envelopes, the edge route-guard predicate and
//! the tag normalization rules applied by every form.

pub mod auth;
pub mod blog;
pub mod case_study;
pub mod cookie;
pub mod endpoints;
pub mod envelope;
pub mod guard;
pub mod params;
pub mod status;
pub mod tags;
pub mod team;
pub mod user;

pub use auth::{AuthPayload, LoginCredentials};
pub use blog::{Blog, CreateBlog, UpdateBlog};
pub use case_study::{CaseStudy, CreateCaseStudy, UpdateCaseStudy};
pub use envelope::{ApiErrorBody, ApiResponse, Paginated, Pagination};
pub use guard::GuardDecision;
pub use params::{BlogListParams, CaseStudyListParams, ListQuery, TeamListParams, UserListParams};
pub use status::EntityStatus;
pub use team::{CreateTeam, ReorderTeams, Team, TeamSocial, UpdateTeam};
pub use user::{CreateUser, Role, UpdateUser, UserProfile};

/// Author summary embedded in blog posts and case studies.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Search-engine metadata shared by blog posts and case studies.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
}

impl Seo {
    /// True when no field would be sent on the wire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meta_title.is_none() && self.meta_description.is_none() && self.meta_keywords.is_none()
    }
}

/// Usage count for one tag, as returned by the `/tags` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
