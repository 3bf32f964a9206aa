//! Note endpoints
//!
//! - `POST /api/note/getNotes` — sorted, paginated note list
//! - `GET /api/note/getNote/:id` — single note
//! - `POST /api/note/create` — create
//! - `PATCH /api/note/:id` — edit
//! - `DELETE /api/note/:id` — delete
//! - `POST /api/note/search` — text search with optional structured filters

use crate::categories::DeletedResponse;
use crate::error::ClientResult;
use crate::http::ApiClient;
use noteboard_shared::filters::{NoteSort, SearchFilters};
use noteboard_shared::models::{Note, UserMatch};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the note list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNotesRequest {
    /// 1-based page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Sort descriptor
    pub sort: NoteSort,
}

/// One page of notes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPageResponse {
    /// Notes on this page
    pub notes: Vec<Note>,

    /// Total notes across all pages
    pub total_items: u64,

    /// Whether another page follows
    pub has_next: bool,
}

/// Response wrapping a single note
#[derive(Debug, Clone, Deserialize)]
pub struct NoteResponse {
    /// The requested note
    pub note: Note,
}

/// Note form payload, shared by create and edit
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    /// Note title
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Note body text
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Category id
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    /// Whether the note is private
    pub is_private: bool,

    /// Ids of users the note is assigned to
    pub assigned_to: Vec<String>,
}

/// Request body for the note search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNotesRequest {
    /// 1-based page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Free-text query
    pub search_text: String,

    /// Structured filters; omitted entirely when no dimension is populated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

impl SearchNotesRequest {
    /// Builds a search request, attaching `filters` only when non-empty
    pub fn new(page: u32, per_page: u32, search_text: impl Into<String>, filters: SearchFilters) -> Self {
        Self {
            page,
            per_page,
            search_text: search_text.into(),
            filters: if filters.is_empty() {
                None
            } else {
                Some(filters)
            },
        }
    }
}

/// One page of search results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNotesResponse {
    /// Matching notes on this page
    pub notes: Vec<Note>,

    /// Total matches across all pages
    pub total_items: u64,

    /// Whether another page follows
    pub has_next: bool,

    /// Creator-filter match flags; absent when no creator filter was sent
    #[serde(default)]
    pub users_with_matched_filter: Option<Vec<UserMatch>>,
}

impl ApiClient {
    /// Fetches a page of notes
    pub async fn get_notes(&self, request: &GetNotesRequest) -> ClientResult<NotesPageResponse> {
        self.send(self.post("/api/note/getNotes").json(request)).await
    }

    /// Fetches a single note by id
    pub async fn get_note(&self, note_id: &str) -> ClientResult<NoteResponse> {
        self.send(self.get(&format!("/api/note/getNote/{note_id}")))
            .await
    }

    /// Creates a note
    pub async fn create_note(&self, draft: &NoteDraft) -> ClientResult<NoteResponse> {
        self.send(self.post("/api/note/create").json(draft)).await
    }

    /// Edits a note by id
    pub async fn edit_note(&self, note_id: &str, draft: &NoteDraft) -> ClientResult<NoteResponse> {
        self.send(self.patch(&format!("/api/note/{note_id}")).json(draft))
            .await
    }

    /// Deletes a note by id
    pub async fn delete_note(&self, note_id: &str) -> ClientResult<DeletedResponse> {
        self.send(self.delete(&format!("/api/note/{note_id}"))).await
    }

    /// Searches notes by text and optional filters
    pub async fn search_notes(
        &self,
        request: &SearchNotesRequest,
    ) -> ClientResult<SearchNotesResponse> {
        self.send(self.post("/api/note/search").json(request)).await
    }
}
