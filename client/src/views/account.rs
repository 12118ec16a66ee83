//! Login screen and the signed-in user's own settings.

use models::guard::DASHBOARD_PATH;
use models::{LoginCredentials, UpdateUser, UserProfile};

use crate::auth::SessionManager;
use crate::error::ApiError;
use crate::services::UserService;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const PROFILE_FAILED: &str = "Failed to update profile";
pub const PASSWORD_FAILED: &str = "Failed to update password";
pub const PASSWORD_MISMATCH: &str = "New password and confirm password must be the same.";
pub const NOT_SIGNED_IN: &str = "You are not signed in.";
pub const NAME_TOO_LONG: &str = "Name must be at most 50 characters";
pub const PASSWORD_TOO_SHORT: &str = "New password must be at least 8 characters";

const PROFILE_NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 8;

/// Field errors joined into a single line, as shown in the settings alerts.
fn one_line(error: &ApiError, fallback: &str) -> String {
    error.user_messages(fallback).join(", ")
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), ..Self::default() }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Log in and move to the dashboard. On failure the server's message (or
    /// a generic one) is kept in [`Self::error`].
    pub async fn submit(&mut self, manager: &SessionManager) -> Option<UserProfile> {
        self.error = None;
        self.submitting = true;
        let credentials = LoginCredentials { email: self.email.trim().to_owned(), password: self.password.clone() };
        let result = manager.login(&credentials).await;
        self.submitting = false;
        match result {
            Ok(user) => {
                manager.session().navigator().redirect(DASHBOARD_PATH);
                Some(user)
            }
            Err(e) => {
                self.error = Some(e.user_message(LOGIN_FAILED));
                None
            }
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// Name and avatar of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub avatar: String,
    error: Option<String>,
    saving: bool,
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &UserProfile) -> Self {
        Self { name: user.name.clone(), avatar: user.avatar.clone().unwrap_or_default(), ..Self::default() }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn payload(&self) -> UpdateUser {
        UpdateUser {
            name: Some(self.name.clone()),
            avatar: models::params::non_blank(Some(self.avatar.clone())),
            ..UpdateUser::default()
        }
    }

    /// Save and re-read the session profile so every screen shows the new
    /// values. Returns the refreshed profile.
    pub async fn submit(&mut self, manager: &SessionManager) -> Option<UserProfile> {
        self.error = None;
        let Some(me) = manager.session().user() else {
            self.error = Some(NOT_SIGNED_IN.to_owned());
            return None;
        };
        if self.name.chars().count() > PROFILE_NAME_MAX {
            self.error = Some(NAME_TOO_LONG.to_owned());
            return None;
        }
        self.saving = true;
        let users = UserService::new(manager.api().clone());
        let result = match users.update(&me.id, &self.payload()).await {
            Ok(_) => manager.refresh_user().await,
            Err(e) => Err(e),
        };
        self.saving = false;
        match result {
            Ok(user) => {
                *self = Self::from_user(&user);
                Some(user)
            }
            Err(e) => {
                self.error = Some(one_line(&e, PROFILE_FAILED));
                None
            }
        }
    }
}

/// New password with confirmation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub new_password: String,
    pub confirm_password: String,
    error: Option<String>,
    saving: bool,
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordForm")
            .field("error", &self.error)
            .field("saving", &self.saving)
            .finish_non_exhaustive()
    }
}

impl PasswordForm {
    #[must_use]
    pub fn new(new_password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self { new_password: new_password.into(), confirm_password: confirm_password.into(), ..Self::default() }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn saving(&self) -> bool {
        self.saving
    }

    /// Change the password. Mismatched or short inputs fail before any
    /// request; on success both inputs are cleared.
    pub async fn submit(&mut self, manager: &SessionManager) -> bool {
        self.error = None;
        let Some(me) = manager.session().user() else {
            self.error = Some(NOT_SIGNED_IN.to_owned());
            return false;
        };
        if self.new_password != self.confirm_password {
            self.error = Some(PASSWORD_MISMATCH.to_owned());
            return false;
        }
        if self.new_password.chars().count() < PASSWORD_MIN {
            self.error = Some(PASSWORD_TOO_SHORT.to_owned());
            return false;
        }
        self.saving = true;
        let payload = UpdateUser { password: Some(self.new_password.clone()), ..UpdateUser::default() };
        let result = UserService::new(manager.api().clone()).update(&me.id, &payload).await;
        self.saving = false;
        match result {
            Ok(_) => {
                self.new_password.clear();
                self.confirm_password.clear();
                true
            }
            Err(e) => {
                self.error = Some(one_line(&e, PASSWORD_FAILED));
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
