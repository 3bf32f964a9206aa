//! Client error type

use crate::session::SessionStorageError;
use noteboard_shared::error::ErrorBody;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: connection refused, DNS, body decoding
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status and a parseable body
    #[error("API error ({status}): {}", body.message)]
    Api {
        /// HTTP status code
        status: u16,

        /// Parsed error payload
        body: ErrorBody,
    },

    /// The server signaled an expired or missing session
    ///
    /// Raised for `500 "jwt expired"` and `401 "Not authenticated."`. The
    /// caller is expected to clear the stored session and return to login.
    #[error("session expired")]
    SessionExpired,

    /// Session storage failed
    #[error(transparent)]
    Session(#[from] SessionStorageError),
}

impl ClientError {
    /// Returns the server error body, if this error carries one
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when the error is the forced-logout marker
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
    }
}
