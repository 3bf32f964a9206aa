//! State container
//!
//! One [`Store`] composes the three resource slices plus the current route.
//! All mutation goes through the store: synchronous actions delegate to the
//! slice reducers, async thunks perform exactly one network call and reduce
//! the three lifecycle outcomes (pending, fulfilled, rejected).
//!
//! # Request generations
//!
//! Every dispatch bumps its slice's generation counter and captures the new
//! value; the response is reduced only if the captured generation is still
//! current. A request superseded by a later dispatch on the same slice can
//! therefore no longer clobber state, regardless of arrival order.
//!
//! # Session expiry
//!
//! Any thunk whose call ends in [`ClientError::SessionExpired`] clears the
//! stored session, drops the in-memory login, and routes to `/login` —
//! unless the store is already on `/login`, in which case nothing is
//! touched.

pub mod category;
pub mod note;
pub mod user;

pub use category::CategoryState;
pub use note::{NoteState, SearchedNotes};
pub use user::UserState;

use crate::router::Route;
use noteboard_client::categories::{CreateCategoryRequest, GetCategoriesRequest};
use noteboard_client::notes::{GetNotesRequest, NoteDraft, SearchNotesRequest};
use noteboard_client::users::{LoginRequest, SignupRequest};
use noteboard_client::{ApiClient, ClientError};
use noteboard_shared::error::ErrorBody;
use noteboard_shared::models::Session;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A paginated resource subtree
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items on the current page
    pub data: Vec<T>,

    /// 1-based page pointer, moved only by change-page actions
    pub current_page: u32,

    /// Total items across all pages
    pub total_items: u64,

    /// Whether another page follows
    pub has_next: bool,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            total_items: 0,
            has_next: false,
        }
    }
}

/// The whole application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// User slice
    pub user: UserState,

    /// Note slice
    pub note: NoteState,

    /// Category slice
    pub category: CategoryState,

    /// Current route
    pub route: Route,
}

/// The process-wide state container
pub struct Store {
    client: ApiClient,
    state: Mutex<AppState>,
}

impl Store {
    /// Creates a store over the given API client
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Mutex::new(AppState::default()),
        }
    }

    /// Reads the stored session once and marks the user logged in if one
    /// exists and no in-memory session does
    ///
    /// The token is not re-validated against the server; an invalid token
    /// surfaces on the first failing call.
    pub fn bootstrap(&self) {
        let session = match self.client.session_store().load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored session");
                None
            }
        };

        if let Some(session) = session {
            let mut state = self.lock();
            if !state.user.logged_in {
                state.user.set_logged_in(&session);
            }
        }
    }

    /// Returns a snapshot of the current state
    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    /// Changes the current route, applying the auth gate
    ///
    /// Navigating to `/login` or `/register` while logged in lands on `/`
    /// instead. Returns the route actually applied.
    pub fn navigate(&self, route: Route) -> Route {
        let mut state = self.lock();
        let destination = if state.user.logged_in && route.is_guest_only() {
            Route::Home
        } else {
            route
        };
        state.route = destination.clone();
        destination
    }

    /// Moves the note-list page pointer
    pub fn change_notes_page(&self, page: u32) {
        self.lock().note.change_page(page);
    }

    /// Moves the search page pointer
    pub fn change_search_page(&self, page: u32) {
        self.lock().note.change_search_page(page);
    }

    /// Moves the category-list page pointer
    pub fn change_categories_page(&self, page: u32) {
        self.lock().category.change_page(page);
    }

    /// Drops the currently open note
    pub fn clear_note(&self) {
        self.lock().note.clear_note();
    }

    /// Logs out: clears the stored session and routes to `/login`
    pub fn logout(&self) {
        if let Err(err) = self.client.session_store().clear() {
            tracing::warn!(error = %err, "could not clear stored session");
        }

        let mut state = self.lock();
        state.user.logged_out();
        state.route = Route::Login;
    }

    // --- user thunks ---

    /// Logs in; on success persists the session and routes to `/`
    ///
    /// Returns true when the request fulfilled. A failed login leaves
    /// storage untouched.
    pub async fn login(&self, request: &LoginRequest) -> bool {
        let generation = self.lock().user.begin_request();
        let outcome = self.client.login(request).await;

        let mut state = self.lock();
        if !state.user.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                let session = Session::new(response.token.clone(), response.user_id.clone());
                if let Err(err) = self.client.session_store().save(&session) {
                    tracing::warn!(error = %err, "could not persist session");
                }
                state.user.login_fulfilled(&response);
                state.route = Route::Home;
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.user.request_failed(body);
                false
            }
        }
    }

    /// Registers; on success routes to `/login`
    pub async fn signup(&self, request: &SignupRequest) -> bool {
        let generation = self.lock().user.begin_request();
        let outcome = self.client.signup(request).await;

        let mut state = self.lock();
        if !state.user.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(_) => {
                state.user.signup_fulfilled();
                state.route = Route::Login;
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.user.request_failed(body);
                false
            }
        }
    }

    /// Fetches the user list
    pub async fn fetch_users(&self) -> bool {
        let generation = self.lock().user.begin_request();
        let outcome = self.client.get_users().await;

        let mut state = self.lock();
        if !state.user.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.user.users_fetched(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.user.request_failed(body);
                false
            }
        }
    }

    // --- note thunks ---

    /// Fetches a page of notes
    pub async fn fetch_notes(&self, request: &GetNotesRequest) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.get_notes(request).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.note.notes_fetched(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    /// Fetches a single note
    pub async fn fetch_note(&self, note_id: &str) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.get_note(note_id).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.note.note_fetched(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    /// Creates a note; on success routes to `/`
    pub async fn create_note(&self, draft: &NoteDraft) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.create_note(draft).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(_) => {
                state.note.note_saved();
                state.route = Route::Home;
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    /// Edits a note; on success routes to `/`
    pub async fn edit_note(&self, note_id: &str, draft: &NoteDraft) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.edit_note(note_id, draft).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(_) => {
                state.note.note_saved();
                state.route = Route::Home;
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    /// Deletes a note; on success routes to `/`, on failure the current
    /// view stays put with the error recorded
    pub async fn delete_note(&self, note_id: &str) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.delete_note(note_id).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(_) => {
                state.note.note_deleted();
                state.route = Route::Home;
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    /// Searches notes
    pub async fn search_notes(&self, request: &SearchNotesRequest) -> bool {
        let generation = self.lock().note.begin_request();
        let outcome = self.client.search_notes(request).await;

        let mut state = self.lock();
        if !state.note.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.note.search_fulfilled(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.note.request_failed(body);
                false
            }
        }
    }

    // --- category thunks ---

    /// Fetches a page of categories
    pub async fn fetch_categories(&self, request: &GetCategoriesRequest) -> bool {
        let generation = self.lock().category.begin_request();
        let outcome = self.client.get_categories(request).await;

        let mut state = self.lock();
        if !state.category.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.category.categories_fetched(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.category.request_failed(body);
                false
            }
        }
    }

    /// Creates a category; on success the list resets to page 1
    pub async fn add_category(&self, request: &CreateCategoryRequest) -> bool {
        let generation = self.lock().category.begin_request();
        let outcome = self.client.create_category(request).await;

        let mut state = self.lock();
        if !state.category.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(response) => {
                state.category.category_added(response);
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.category.request_failed(body);
                false
            }
        }
    }

    /// Deletes a category
    pub async fn delete_category(&self, category_id: &str) -> bool {
        let generation = self.lock().category.begin_request();
        let outcome = self.client.delete_category(category_id).await;

        let mut state = self.lock();
        if !state.category.is_current(generation) {
            return false;
        }

        match outcome {
            Ok(_) => {
                state.category.category_deleted();
                true
            }
            Err(err) => {
                let body = self.classify_failure(&mut state, err);
                state.category.request_failed(body);
                false
            }
        }
    }

    // --- internals ---

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Maps a failed call to the error body the slice records; a session
    /// expiry performs the forced logout instead and records nothing
    fn classify_failure(&self, state: &mut AppState, err: ClientError) -> Option<ErrorBody> {
        match err {
            ClientError::SessionExpired => {
                self.force_logout(state);
                None
            }
            ClientError::Api { body, .. } => Some(body),
            other => {
                tracing::error!(error = %other, "request failed without a server response");
                None
            }
        }
    }

    /// Clears storage and returns to `/login`; skipped entirely when the
    /// store is already there
    fn force_logout(&self, state: &mut AppState) {
        if state.route == Route::Login {
            return;
        }

        if let Err(err) = self.client.session_store().clear() {
            tracing::warn!(error = %err, "could not clear stored session");
        }
        state.user.logged_out();
        state.route = Route::Login;
    }
}
