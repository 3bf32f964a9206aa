//! API error body
//!
//! The API reports every failure with one generic shape: a `message` string
//! plus an optional list of per-field validation issues under `data`. Nothing
//! richer than that exists on the wire; the two expiry markers the client
//! special-cases are plain messages inside this shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,

    /// Per-field validation issues, empty for non-validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ValidationIssue>,
}

/// One validation failure inside an [`ErrorBody`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue kind reported by the server (e.g. "field")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Offending value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Issue message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Path of the field that failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    /// Builds a body from a bare message, for responses without JSON
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Vec::new(),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.data.is_empty() {
            write!(f, " ({} validation issues)", self.data.len())?;
        }
        Ok(())
    }
}
