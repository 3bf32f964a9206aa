//! Note slice
//!
//! Owns the paginated note list, the separate search-results subtree, and
//! the currently open note. Create/edit/delete fulfillment clears loading
//! and error only; navigation back home is the store's job.

use crate::store::Paginated;
use noteboard_client::notes::{NoteResponse, NotesPageResponse, SearchNotesResponse};
use noteboard_shared::error::ErrorBody;
use noteboard_shared::models::{Note, UserMatch};

/// Search-results subtree: a note page plus creator-filter match flags
#[derive(Debug, Clone, Default)]
pub struct SearchedNotes {
    /// Matching notes on the current page
    pub data: Vec<Note>,

    /// Which users matched the active creator filter
    pub users_with_matched_filter: Vec<UserMatch>,

    /// 1-based page pointer
    pub current_page: u32,

    /// Total matches across all pages
    pub total_items: u64,

    /// Whether another page follows
    pub has_next: bool,
}

/// Note slice state
#[derive(Debug, Clone, Default)]
pub struct NoteState {
    /// Paginated note list (the home page)
    pub notes: Paginated<Note>,

    /// Search results (the search page)
    pub searched: SearchedNotes,

    /// Currently open note
    pub note: Option<Note>,

    /// Whether a request is in flight
    pub is_loading: bool,

    /// Last error body, cleared by any fulfilled request
    pub error: Option<ErrorBody>,

    /// Request generation, bumped by every dispatch
    generation: u64,
}

impl NoteState {
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.generation
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Moves the list page pointer
    pub fn change_page(&mut self, page: u32) {
        self.notes.current_page = page;
    }

    /// Moves the search page pointer
    pub fn change_search_page(&mut self, page: u32) {
        self.searched.current_page = page;
    }

    /// Drops the currently open note (leaving the note view)
    pub fn clear_note(&mut self) {
        self.note = None;
    }

    /// Fulfilled list fetch: replaces data wholesale, keeps the page pointer
    pub(crate) fn notes_fetched(&mut self, response: NotesPageResponse) {
        self.notes.data = response.notes;
        self.notes.total_items = response.total_items;
        self.notes.has_next = response.has_next;
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled single-note fetch
    pub(crate) fn note_fetched(&mut self, response: NoteResponse) {
        self.note = Some(response.note);
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled create or edit
    pub(crate) fn note_saved(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled delete
    pub(crate) fn note_deleted(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled search: replaces the search subtree
    ///
    /// The match-flag list resets to empty when the response omits it, which
    /// is what the server does when no creator filter was sent.
    pub(crate) fn search_fulfilled(&mut self, response: SearchNotesResponse) {
        self.searched.data = response.notes;
        self.searched.total_items = response.total_items;
        self.searched.has_next = response.has_next;
        self.searched.users_with_matched_filter =
            response.users_with_matched_filter.unwrap_or_default();
        self.is_loading = false;
        self.error = None;
    }

    /// Rejected request: stale data stays in place
    pub(crate) fn request_failed(&mut self, error: Option<ErrorBody>) {
        self.is_loading = false;
        if let Some(body) = error {
            self.error = Some(body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use noteboard_shared::models::{Category, User};

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: format!("Note {id}"),
            description: "body".to_string(),
            category: Category {
                id: "cat-1".to_string(),
                title: "Work".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            creator: vec![user("user-1")],
            is_private: false,
            assigned_to: vec![],
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: None,
            notes: vec![],
        }
    }

    #[test]
    fn test_list_fetch_keeps_page_pointer() {
        let mut state = NoteState::default();
        state.change_page(2);

        state.begin_request();
        state.notes_fetched(NotesPageResponse {
            notes: vec![note("note-1")],
            total_items: 6,
            has_next: true,
        });

        assert_eq!(state.notes.current_page, 2);
        assert_eq!(state.notes.total_items, 6);
        assert!(state.notes.has_next);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_search_resets_match_flags_when_absent() {
        let mut state = NoteState::default();
        state.begin_request();
        state.search_fulfilled(SearchNotesResponse {
            notes: vec![],
            total_items: 0,
            has_next: false,
            users_with_matched_filter: Some(vec![UserMatch {
                user: user("user-1"),
                matched_filter: true,
            }]),
        });
        assert_eq!(state.searched.users_with_matched_filter.len(), 1);

        state.begin_request();
        state.search_fulfilled(SearchNotesResponse {
            notes: vec![],
            total_items: 0,
            has_next: false,
            users_with_matched_filter: None,
        });
        assert!(state.searched.users_with_matched_filter.is_empty());
    }

    #[test]
    fn test_search_subtree_is_independent_of_list() {
        let mut state = NoteState::default();
        state.begin_request();
        state.notes_fetched(NotesPageResponse {
            notes: vec![note("note-1")],
            total_items: 1,
            has_next: false,
        });

        state.begin_request();
        state.search_fulfilled(SearchNotesResponse {
            notes: vec![note("note-2"), note("note-3")],
            total_items: 2,
            has_next: false,
            users_with_matched_filter: None,
        });

        assert_eq!(state.notes.data.len(), 1);
        assert_eq!(state.searched.data.len(), 2);
    }

    #[test]
    fn test_clear_note() {
        let mut state = NoteState::default();
        state.begin_request();
        state.note_fetched(NoteResponse { note: note("note-1") });
        assert!(state.note.is_some());

        state.clear_note();
        assert!(state.note.is_none());
    }

    #[test]
    fn test_rejection_keeps_previous_page_visible() {
        let mut state = NoteState::default();
        state.begin_request();
        state.notes_fetched(NotesPageResponse {
            notes: vec![note("note-1")],
            total_items: 1,
            has_next: false,
        });

        state.begin_request();
        state.request_failed(Some(ErrorBody::from_message("fetch failed")));

        assert_eq!(state.notes.data.len(), 1);
        assert_eq!(state.error.as_ref().unwrap().message, "fetch failed");
    }
}
