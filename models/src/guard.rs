//! Edge route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge server evaluates this per request before any console page loads.
//! It only sees the request path and whether the session cookie is present;
//! it never validates the token itself. A stale or forged cookie passes here
//! and is rejected later when the console calls `/auth/me`.

/// Paths reachable without a session. Matched by prefix, so `/login/reset`
/// is public too.
pub const PUBLIC_PATHS: [&str; 2] = ["/login", "/register"];

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of evaluating one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Pass the request through unmodified.
    Allow,
    /// Redirect to the given path.
    Redirect(&'static str),
}

#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| path.starts_with(public))
}

/// Decide what to do with a request for `path`.
///
/// Signed-in users are bounced off the login/register screens to the
/// dashboard; anonymous users are bounced from everything else to login.
#[must_use]
pub fn evaluate(path: &str, has_session_cookie: bool) -> GuardDecision {
    match (is_public_path(path), has_session_cookie) {
        (true, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        (false, false) => GuardDecision::Redirect(LOGIN_PATH),
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
