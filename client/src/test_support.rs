//! Fixtures shared by the crate's unit tests.

use std::sync::Arc;

use models::UserProfile;
use serde_json::{Value, json};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::navigation::MemoryNavigator;
use crate::session::Session;
use crate::storage::{MemoryCookieMirror, MemoryTokenStore};

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "_id": id,
        "name": "Ada Lovelace",
        "email": email,
        "role": "admin",
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn profile(id: &str) -> UserProfile {
    serde_json::from_value(user_json(id, "ada@example.com")).expect("fixture profile")
}

pub fn blog_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "content": "<p>body</p>",
        "tags": ["rust"],
        "status": "draft",
        "author": { "_id": "u1", "name": "Ada" },
        "readingTime": 1,
        "createdAt": "2024-05-01T08:00:00.000Z",
        "updatedAt": "2024-05-01T08:00:00.000Z"
    })
}

/// Page count a backend reports for `total` rows at `limit` per page: never
/// less than one, so an empty result is still "page 1 of 1".
pub fn pages_for(total: u64, limit: u32) -> u32 {
    u32::try_from(total.div_ceil(u64::from(limit.max(1)))).unwrap_or(u32::MAX).max(1)
}

pub fn paginated(items: Vec<Value>, total: u64, page: u32, pages: u32) -> Value {
    json!({
        "success": true,
        "data": items,
        "pagination": { "total": total, "pages": pages, "page": page, "limit": 10 }
    })
}

/// Session, its stores and navigator, wired to an API client for `base`.
pub struct Harness {
    pub tokens: Arc<MemoryTokenStore>,
    pub cookie: Arc<MemoryCookieMirror>,
    pub navigator: Arc<MemoryNavigator>,
    pub session: Arc<Session>,
    pub api: ApiClient,
}

impl Harness {
    pub fn new(base: &str, path: &str) -> Self {
        let tokens = Arc::new(MemoryTokenStore::default());
        let cookie = Arc::new(MemoryCookieMirror::default());
        let navigator = Arc::new(MemoryNavigator::at(path));
        let session = Session::new(tokens.clone(), cookie.clone(), navigator.clone());
        let api = ApiClient::new(&ClientConfig::new(base), session.clone()).expect("client builds");
        Self { tokens, cookie, navigator, session, api }
    }

    /// Harness that already holds `token` in both locations.
    pub fn signed_in(base: &str, path: &str, token: &str) -> Self {
        let harness = Self::new(base, path);
        harness.session.establish(token, profile("u1")).expect("memory stores never fail");
        harness
    }
}
