//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge server sits in front of the built console site. Every console
//! route passes through the cookie route guard before a file is served;
//! unknown paths fall back to the site's `index.html` so client-side routes
//! resolve. The health check and the static asset bundle bypass the guard so
//! the login screen can load its own scripts and styles.

pub mod guard;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::EdgeConfig;

/// Path prefix of the unguarded static asset bundle.
pub const ASSETS_PREFIX: &str = "/assets";

pub fn app(config: &EdgeConfig) -> Router {
    let index = config.site_dir.join("index.html");
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    let console = Router::new()
        .fallback_service(site)
        .layer(middleware::from_fn(guard::route_guard));

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service(ASSETS_PREFIX, ServeDir::new(config.site_dir.join("assets")))
        .merge(console)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
