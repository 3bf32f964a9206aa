//! Session model
//!
//! A session is the pair the login endpoint returns and the client persists:
//! the bearer token and the id of the user it was issued for. At most one
//! session exists per storage instance.

use serde::{Deserialize, Serialize};

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to every authenticated request
    pub token: String,

    /// Id of the logged-in user
    pub user_id: String,
}

impl Session {
    /// Creates a session from its two parts
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}
