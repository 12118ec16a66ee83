//! Session cookie contract shared by the console (writer) and the edge
//! guard (reader).

use std::time::Duration;

pub const SESSION_COOKIE_NAME: &str = "auth-token";
pub const SESSION_COOKIE_PATH: &str = "/";
pub const SESSION_COOKIE_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// `Set-Cookie` value that stores `token` for seven days.
///
/// The cookie is deliberately script-visible (no `HttpOnly`): the console
/// writes it itself after login.
#[must_use]
pub fn set_cookie_header(token: &str) -> String {
    format!(
        "{SESSION_COOKIE_NAME}={token}; Path={SESSION_COOKIE_PATH}; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE_MAX_AGE.as_secs()
    )
}

/// `Set-Cookie` value that expires the session cookie immediately.
#[must_use]
pub fn clear_cookie_header() -> String {
    format!("{SESSION_COOKIE_NAME}=; Path={SESSION_COOKIE_PATH}; Max-Age=0; SameSite=Lax")
}

/// A cookie counts as present only when it carries a non-empty value.
#[must_use]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
