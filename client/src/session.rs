//! Process-wide session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` is shared (`Arc`) by the API client, the session manager and
//! every view. It owns the current profile, the `loading` flag, and the two
//! token locations (durable store + cookie mirror).
//!
//! DESIGN
//! ======
//! All mutation goes through a handful of methods that take the same mutex,
//! so the two token locations change together and never disagree on
//! presence. Expiry after a 401 is idempotent: the first caller clears and
//! redirects, later callers see the `expired` flag and do nothing until a new
//! session is established.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use models::UserProfile;
use models::guard::LOGIN_PATH;
use tracing::{info, warn};

use crate::navigation::Navigator;
use crate::storage::{CookieMirror, MemoryCookieMirror, MemoryTokenStore, TokenStore};

/// Read-only view of the session handed to front-ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// True until the first `initialize` finishes.
    pub loading: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug)]
struct Inner {
    user: Option<UserProfile>,
    loading: bool,
    expired: bool,
}

pub struct Session {
    tokens: Arc<dyn TokenStore>,
    cookie: Arc<dyn CookieMirror>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<Inner>,
}

impl Session {
    #[must_use]
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        cookie: Arc<dyn CookieMirror>,
        navigator: Arc<dyn Navigator>,
    ) -> Arc<Self> {
        Arc::new(Self {
            tokens,
            cookie,
            navigator,
            inner: Mutex::new(Inner { user: None, loading: true, expired: false }),
        })
    }

    /// Session over fresh in-memory stores.
    #[must_use]
    pub fn in_memory(navigator: Arc<dyn Navigator>) -> Arc<Self> {
        Self::new(Arc::new(MemoryTokenStore::default()), Arc::new(MemoryCookieMirror::default()), navigator)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        let inner = self.lock();
        SessionState { user: inner.user.clone(), loading: inner.loading }
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.lock().user.clone()
    }

    /// Token from the durable store, attached to outbound requests.
    pub fn token(&self) -> io::Result<Option<String>> {
        self.tokens.load()
    }

    /// Token as the edge guard would see it.
    pub fn cookie_value(&self) -> io::Result<Option<String>> {
        self.cookie.value()
    }

    #[must_use]
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Clear both token locations and the profile, then navigate to login.
    pub fn logout(&self) {
        {
            let mut inner = self.lock();
            self.clear_stores();
            inner.user = None;
            inner.loading = false;
            inner.expired = true;
        }
        info!("session: logged out");
        self.navigator.redirect(LOGIN_PATH);
    }

    /// Session-expired sequence run on any 401.
    ///
    /// Skipped while the front-end is already on a login route. Returns
    /// `true` only for the call that actually cleared the session.
    pub fn expire(&self) -> bool {
        if self.navigator.current_path().starts_with(LOGIN_PATH) {
            return false;
        }
        {
            let mut inner = self.lock();
            if inner.expired {
                return false;
            }
            self.clear_stores();
            inner.user = None;
            inner.loading = false;
            inner.expired = true;
        }
        warn!("session: expired by 401, redirecting to login");
        self.navigator.redirect(LOGIN_PATH);
        true
    }

    /// Store a fresh token in both locations and adopt `user`.
    ///
    /// The durable write happens first; if mirroring into the cookie fails
    /// the durable copy is rolled back so the two never disagree.
    pub(crate) fn establish(&self, token: &str, user: UserProfile) -> io::Result<()> {
        let mut inner = self.lock();
        self.tokens.save(token)?;
        if let Err(e) = self.cookie.set(token) {
            if let Err(rollback) = self.tokens.clear() {
                warn!(error = %rollback, "session: token rollback failed");
            }
            return Err(e);
        }
        inner.user = Some(user);
        inner.loading = false;
        inner.expired = false;
        Ok(())
    }

    /// Adopt `user` for the persisted token and refresh the cookie's expiry.
    pub(crate) fn confirm(&self, token: &str, user: UserProfile) -> io::Result<()> {
        let mut inner = self.lock();
        self.cookie.set(token)?;
        inner.user = Some(user);
        inner.loading = false;
        inner.expired = false;
        Ok(())
    }

    /// Finish initialization without a session.
    pub(crate) fn mark_anonymous(&self) {
        let mut inner = self.lock();
        self.clear_stores();
        inner.user = None;
        inner.loading = false;
    }

    pub(crate) fn replace_user(&self, user: UserProfile) {
        self.lock().user = Some(user);
    }

    fn clear_stores(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "session: clearing token store failed");
        }
        if let Err(e) = self.cookie.clear() {
            warn!(error = %e, "session: clearing cookie failed");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Session")
            .field("user", &inner.user.as_ref().map(|u| &u.email))
            .field("loading", &inner.loading)
            .field("expired", &inner.expired)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
