//! Session manager: the login / logout / startup flows over the shared
//! [`Session`].

use std::sync::Arc;

use models::endpoints::{AUTH_LOGIN, AUTH_ME};
use models::{ApiResponse, AuthPayload, LoginCredentials, UserProfile};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::session::{Session, SessionState};

#[derive(Clone, Debug)]
pub struct SessionManager {
    api: ApiClient,
}

impl SessionManager {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        self.api.session()
    }

    /// Hydrate the session from the persisted token.
    ///
    /// Without a token the session is marked anonymous and no request is
    /// made. With one, `/auth/me` decides: success adopts the profile and
    /// refreshes the cookie's expiry, any failure clears both locations.
    /// `loading` is false afterwards in every branch.
    pub async fn initialize(&self) -> SessionState {
        let session = self.session();
        let token = match session.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "session: token store unreadable");
                None
            }
        };
        let Some(token) = token else {
            session.mark_anonymous();
            return session.snapshot();
        };

        match self.api.get::<ApiResponse<UserProfile>>(AUTH_ME).await {
            Ok(body) => {
                let email = body.data.email.clone();
                if let Err(e) = session.confirm(&token, body.data) {
                    warn!(error = %e, "session: cookie refresh failed");
                    session.mark_anonymous();
                } else {
                    info!(%email, "session: restored");
                }
            }
            Err(e) => {
                info!(error = %e, "session: stored token rejected");
                session.mark_anonymous();
            }
        }
        session.snapshot()
    }

    /// Exchange credentials for a token and adopt the returned profile.
    ///
    /// # Errors
    ///
    /// Backend failures are returned untouched so the login form can show the
    /// server's message. Storage failures surface as [`ApiError::Storage`].
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, ApiError> {
        let body: ApiResponse<AuthPayload> = self.api.post(AUTH_LOGIN, credentials).await?;
        let AuthPayload { user, token } = body.data;
        self.session().establish(&token, user.clone())?;
        info!(email = %user.email, role = %user.role, "session: logged in");
        Ok(user)
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    /// Re-read the signed-in profile after it was edited.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; the current profile is kept on failure.
    pub async fn refresh_user(&self) -> Result<UserProfile, ApiError> {
        let body: ApiResponse<UserProfile> = self.api.get(AUTH_ME).await?;
        self.session().replace_user(body.data.clone());
        Ok(body.data)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
