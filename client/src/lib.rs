//! # client
//!
//! Console-side runtime for the content management API: the HTTP client,
//! the shared session (token in a durable store, mirrored into the cookie the
//! edge guard reads), typed resource services, and the list/form view state
//! that front-ends drive.
//!
//! The crate is front-end agnostic. Storage and navigation are traits so the
//! same session lifecycle runs behind a terminal (`cli`) or a browser shell.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod services;
pub mod session;
pub mod storage;
pub mod views;

#[cfg(test)]
mod test_support;

pub use api::ApiClient;
pub use auth::SessionManager;
pub use config::ClientConfig;
pub use error::ApiError;
pub use navigation::{MemoryNavigator, Navigator};
pub use session::{Session, SessionState};
