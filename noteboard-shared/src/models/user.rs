//! User model

use crate::models::Note;
use serde::{Deserialize, Serialize};

/// A user account
///
/// The upstream API echoes the stored password hash in user listings; it is
/// modeled as optional so a sanitized server works the same and nothing in
/// the client depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    #[serde(rename = "_id")]
    pub id: String,

    /// First name
    pub first_name: String,

    /// Last name (lowercase `lastname` on the wire)
    #[serde(rename = "lastname")]
    pub last_name: String,

    /// Unique handle
    pub username: String,

    /// Email address, used as the login identifier
    pub email: String,

    /// Password hash, if the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Notes owned by the user, when the endpoint expands them
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl User {
    /// Returns "First Last" for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user annotated with whether it matched the active creator filter
///
/// Returned by the note search endpoint so the UI can grey out creators that
/// produced no hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMatch {
    /// The user itself
    #[serde(flatten)]
    pub user: User,

    /// Whether this user matched the creator filter
    pub matched_filter: bool,
}
