//! Errors surfaced by the API client and everything built on it.

use models::ApiErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 from any endpoint. The session has already been expired by the
    /// time this is returned.
    #[error("unauthorized: {}", display_message(message.as_deref()))]
    Unauthorized { message: Option<String> },
    #[error("not found: {}", display_message(message.as_deref()))]
    NotFound { message: Option<String> },
    /// Any other non-success status, with the backend's message and
    /// field-level errors when it sent them.
    #[error("request rejected ({status}): {}", display_message(message.as_deref()))]
    Rejected { status: u16, message: Option<String>, errors: Vec<String> },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    #[error("token storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

fn display_message(message: Option<&str>) -> &str {
    message.unwrap_or("no message")
}

impl ApiError {
    /// Map a non-success status and its (possibly empty) body.
    pub(crate) fn from_status(status: u16, body: ApiErrorBody) -> Self {
        let message = body.message.filter(|m| !m.trim().is_empty());
        match status {
            401 => Self::Unauthorized { message },
            404 => Self::NotFound { message },
            _ => Self::Rejected { status, message, errors: body.errors.unwrap_or_default() },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Lines to show in a form or list: the backend's field errors, else its
    /// message, else `fallback`. Transport and decode failures always use
    /// `fallback`.
    #[must_use]
    pub fn user_messages(&self, fallback: &str) -> Vec<String> {
        let body = match self {
            Self::Rejected { message, errors, .. } => {
                ApiErrorBody { message: message.clone(), errors: Some(errors.clone()) }
            }
            Self::Unauthorized { message } | Self::NotFound { message } => {
                ApiErrorBody { message: message.clone(), errors: None }
            }
            _ => ApiErrorBody::default(),
        };
        body.messages(fallback)
    }

    /// First user-facing line; see [`Self::user_messages`].
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.user_messages(fallback).into_iter().next().unwrap_or_else(|| fallback.to_owned())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
