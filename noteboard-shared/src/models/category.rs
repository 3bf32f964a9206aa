//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title
    pub title: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last updated
    pub updated_at: DateTime<Utc>,
}
