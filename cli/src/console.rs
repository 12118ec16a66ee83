//! Session wiring for the terminal front-end.
//!
//! The CLI plays the part of the console: it keeps the token in a file
//! (`<state>/token`), mirrors it into a Netscape cookie file
//! (`<state>/cookies.txt`) for the console host, and applies the same route
//! guard the edge server applies before running a protected command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use client::storage::{FileCookieJar, FileTokenStore};
use client::{ApiClient, ClientConfig, MemoryNavigator, Navigator, Session, SessionManager};
use models::UserProfile;
use models::guard::{self, GuardDecision, LOGIN_PATH};

use crate::CliError;

pub const TOKEN_FILE: &str = "token";
pub const COOKIE_FILE: &str = "cookies.txt";

/// Default state directory: `<config dir>/cms`.
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cms"))
}

pub struct Console {
    pub manager: SessionManager,
    pub navigator: Arc<MemoryNavigator>,
    pub config: ClientConfig,
}

impl Console {
    /// Wire a session over the state directory as if the console were
    /// showing `path`.
    pub fn open(config: ClientConfig, state_dir: &Path, console_host: &str, path: &str) -> Result<Self, CliError> {
        let navigator = Arc::new(MemoryNavigator::at(path));
        let session = Session::new(
            Arc::new(FileTokenStore::new(state_dir.join(TOKEN_FILE))),
            Arc::new(FileCookieJar::new(state_dir.join(COOKIE_FILE), console_host)),
            navigator.clone(),
        );
        let api = ApiClient::new(&config, session)?;
        tracing::debug!(state_dir = %state_dir.display(), path, "console: session opened");
        Ok(Self { manager: SessionManager::new(api), navigator, config })
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        self.manager.api()
    }

    /// Guard check plus session hydration. Fails with
    /// [`CliError::NotSignedIn`] when either says there is no session.
    pub async fn require_user(&self) -> Result<UserProfile, CliError> {
        let session = self.manager.session();
        let has_cookie = session.cookie_value().map_err(client::ApiError::from)?.is_some();
        if guard::evaluate(&self.navigator.current_path(), has_cookie) == GuardDecision::Redirect(LOGIN_PATH) {
            return Err(CliError::NotSignedIn);
        }
        self.manager.initialize().await.user.ok_or(CliError::NotSignedIn)
    }

    /// True when a 401 during this run sent the session back to login.
    #[must_use]
    pub fn session_expired(&self) -> bool {
        self.navigator.redirects().iter().any(|path| path == LOGIN_PATH)
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
