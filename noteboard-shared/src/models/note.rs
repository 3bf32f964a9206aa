//! Note model
//!
//! Notes reference their category and creator(s) as embedded objects. The
//! `assignedTo` list is polymorphic on the wire: depending on the endpoint it
//! holds either bare user ids or expanded user objects, so both shapes are
//! accepted here.

use crate::models::{Category, User};
use serde::{Deserialize, Serialize};

/// A note as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note ID
    #[serde(rename = "_id")]
    pub id: String,

    /// Note title
    pub title: String,

    /// Note body text
    pub description: String,

    /// Category the note belongs to
    pub category: Category,

    /// Creator of the note (the API wraps it in a one-element list)
    pub creator: Vec<User>,

    /// Whether the note is visible only to its creator and assignees
    pub is_private: bool,

    /// Users the note is assigned to, as ids or expanded objects
    #[serde(default)]
    pub assigned_to: Vec<Assignee>,
}

/// One entry of a note's `assignedTo` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Assignee {
    /// Bare user id
    Id(String),

    /// Expanded user object
    User(Box<User>),
}

impl Assignee {
    /// Returns the assignee's user id regardless of wire shape
    pub fn id(&self) -> &str {
        match self {
            Assignee::Id(id) => id,
            Assignee::User(user) => &user.id,
        }
    }
}
