//! Search filters and sort descriptors
//!
//! The note list endpoint takes a sort descriptor; the search endpoint takes
//! an optional structured filter object. The contract for filters is purely
//! presence-based: the `filters` key is attached only when at least one
//! dimension is populated, and within it only the populated dimensions are
//! serialized. [`SearchFilters::is_empty`] is what callers check before
//! attaching.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Field the note list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Sort by creation time
    CreatedAt,

    /// Sort by last update time
    UpdatedAt,

    /// Sort by category
    Category,

    /// Sort by title
    Title,
}

/// Sort direction, `1` ascending / `-1` descending on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        })
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            1 => Ok(SortOrder::Ascending),
            -1 => Ok(SortOrder::Descending),
            other => Err(de::Error::custom(format!(
                "sort order must be 1 or -1, got {other}"
            ))),
        }
    }
}

/// Sort descriptor for the note list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSort {
    /// Field to sort by
    pub name: SortField,

    /// Direction
    pub order: SortOrder,
}

impl Default for NoteSort {
    /// Newest first, matching the home page default
    fn default() -> Self {
        Self {
            name: SortField::CreatedAt,
            order: SortOrder::Descending,
        }
    }
}

/// Inclusive timestamp range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start
    pub from: DateTime<Utc>,

    /// Range end
    pub to: DateTime<Utc>,
}

/// Creator filter: an id list plus a select-all flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorFilter {
    /// Selected creator ids
    pub selected: Vec<String>,

    /// Whether "all creators" is checked
    pub select_all: bool,
}

/// Structured filter object for the note search request
///
/// Every dimension is optional and omitted from the JSON when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Creation-time range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateRange>,

    /// Update-time range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateRange>,

    /// Category id list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Creator selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creators: Option<CreatorFilter>,
}

impl SearchFilters {
    /// Returns true when no dimension is populated
    ///
    /// An empty filter object must not be attached to the search request at
    /// all; the server treats a present-but-empty `filters` key differently
    /// from an absent one.
    pub fn is_empty(&self) -> bool {
        self.created_at.is_none()
            && self.updated_at.is_none()
            && self.categories.is_none()
            && self.creators.is_none()
    }
}
