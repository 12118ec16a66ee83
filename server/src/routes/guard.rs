//! Cookie route guard middleware.
//!
//! Applies [`models::guard::evaluate`] to each console request. The session
//! cookie is only checked for presence; the token inside is validated later
//! by the API when the console calls `/auth/me`.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use models::cookie::{self, SESSION_COOKIE_NAME};
use models::guard::{self, GuardDecision};

pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let has_session = cookie::is_present(jar.get(SESSION_COOKIE_NAME).map(Cookie::value));

    if let GuardDecision::Redirect(target) = guard::evaluate(request.uri().path(), has_session) {
        tracing::debug!(path = request.uri().path(), target, has_session, "guard: redirecting");
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
