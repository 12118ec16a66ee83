//! REST paths, relative to the configured API base URL.

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_ME: &str = "/auth/me";

pub const BLOGS: &str = "/blogs";
pub const CASE_STUDIES: &str = "/case-studies";
pub const TEAMS: &str = "/teams";
pub const TEAMS_REORDER: &str = "/teams/reorder";
pub const USERS: &str = "/users";

/// `{base}/{id}` for a collection path. The id is percent-encoded as a
/// single segment, so `/`, `?` and `#` in it can never reach another route.
#[must_use]
pub fn by_id(base: &str, id: &str) -> String {
    format!("{base}/{}", urlencoding::encode(id))
}

/// `{base}/tags` for collections that expose tag counts.
#[must_use]
pub fn tags(base: &str) -> String {
    format!("{base}/tags")
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod tests;
