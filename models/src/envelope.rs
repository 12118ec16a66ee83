//! Response envelopes shared by every endpoint.
//!
//! Success bodies wrap the payload in `data`; list endpoints add a
//! `pagination` block; failures carry a `message` and optionally a list of
//! field-level `errors`.

use serde::{Deserialize, Serialize};

/// Single-entity (or unit) success body: `{ "data": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Paginated list body: `{ "data": [...], "pagination": {...} }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Page metadata. `page` is 1-based; `pages` is at least 1 so that an empty
/// result still renders as "page 1 of 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub pages: u32,
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Failure body: `{ "message": "...", "errors": ["..."] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ApiErrorBody {
    /// Lines to show the user: field errors when present, else the message,
    /// else `fallback`.
    #[must_use]
    pub fn messages(&self, fallback: &str) -> Vec<String> {
        if let Some(errors) = self.errors.as_ref().filter(|e| !e.is_empty()) {
            return errors.clone();
        }
        match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => vec![message.to_owned()],
            _ => vec![fallback.to_owned()],
        }
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
