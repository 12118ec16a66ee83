//! HTTP client for the content API.
//!
//! Every request carries the durable token as a bearer credential when one
//! exists. Non-success statuses become [`ApiError`]; a 401 additionally runs
//! the session-expired sequence before the error reaches the caller. There
//! are no retries.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;
use models::ApiErrorBody;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Build a client with the configured overall request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.trim_end_matches('/').to_owned(), session })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`, decoding the whole response body as `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, self.http.get(self.url(path))).await
    }

    /// `GET path?query`. Fields the query skips are not sent at all.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::GET, path, self.http.get(self.url(path)).query(query)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, self.http.post(self.url(path)).json(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, self.http.put(self.url(path)).json(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, self.http.delete(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.session.token()? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "api: transport failure");
            ApiError::Http(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: ApiErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            let error = ApiError::from_status(status.as_u16(), body);
            warn!(%method, path, status = status.as_u16(), "api: request failed");
            if error.is_unauthorized() {
                self.session.expire();
            }
            return Err(error);
        }

        debug!(%method, path, status = status.as_u16(), "api: ok");
        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"null" } else { &bytes };
        serde_json::from_slice(raw).map_err(|e| ApiError::Decode(format!("{method} {path}: {e}")))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
