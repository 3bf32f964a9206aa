//! HTTP client core
//!
//! [`ApiClient`] owns the `reqwest` client, the API base URL, and a shared
//! [`SessionStore`]. Every request goes through [`ApiClient::send`], which
//! attaches the bearer token when a session exists, decodes the success body,
//! and maps error responses onto [`ClientError`]. The endpoint methods
//! themselves live in the per-resource modules.

use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use noteboard_shared::error::ErrorBody;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Typed client for the Noteboard API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client for the given base URL
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: Client::new(),
            base_url,
            session,
        }
    }

    /// The session store this client reads tokens from
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.http.patch(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Sends a request and decodes the response
    ///
    /// Attaches `Authorization: Bearer <token>` when the session store holds
    /// a session. Success bodies decode into `T`; error bodies decode into
    /// [`ErrorBody`], falling back to the raw text when the body is not
    /// JSON. The two session-expiry markers become
    /// [`ClientError::SessionExpired`].
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        mut builder: RequestBuilder,
    ) -> ClientResult<T> {
        if let Some(session) = self.session.load()? {
            builder = builder.bearer_auth(&session.token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await?;
        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| {
            if text.is_empty() {
                ErrorBody::from_message(status.to_string())
            } else {
                ErrorBody::from_message(text)
            }
        });

        if is_expiry_marker(status, &body.message) {
            tracing::warn!(status = status.as_u16(), "session expired, forcing logout");
            return Err(ClientError::SessionExpired);
        }

        tracing::debug!(status = status.as_u16(), message = %body.message, "API error");
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// The two status/message pairs the server uses for a dead session
fn is_expiry_marker(status: StatusCode, message: &str) -> bool {
    (status == StatusCode::INTERNAL_SERVER_ERROR && message == "jwt expired")
        || (status == StatusCode::UNAUTHORIZED && message == "Not authenticated.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(
            "http://localhost:8080/",
            Arc::new(MemorySessionStore::new()),
        );
        assert_eq!(client.url("/api/user/login"), "http://localhost:8080/api/user/login");
    }

    #[test]
    fn test_expiry_marker_requires_exact_pair() {
        assert!(is_expiry_marker(StatusCode::INTERNAL_SERVER_ERROR, "jwt expired"));
        assert!(is_expiry_marker(StatusCode::UNAUTHORIZED, "Not authenticated."));

        // Same messages under other statuses are ordinary errors
        assert!(!is_expiry_marker(StatusCode::UNAUTHORIZED, "jwt expired"));
        assert!(!is_expiry_marker(StatusCode::INTERNAL_SERVER_ERROR, "Not authenticated."));
        assert!(!is_expiry_marker(StatusCode::UNAUTHORIZED, "Bad credentials."));
    }
}
