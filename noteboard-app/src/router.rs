//! Client routes
//!
//! The eight client routes, with bidirectional mapping
//! between the enum and URL paths. The auth gate (redirect away from login
//! and register while logged in) lives in [`crate::store::Store::navigate`],
//! which is the only place routes change.

use std::fmt;

/// A client-visible route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` — the paginated note list
    #[default]
    Home,

    /// `/login`
    Login,

    /// `/register`
    Register,

    /// `/note/:noteId` — single note view
    Note(String),

    /// `/new-note` — note creation form
    NewNote,

    /// `/edit-note/:noteId` — note edit form
    EditNote(String),

    /// `/categories` — category management
    Categories,

    /// `/notes-search` — search page
    NotesSearch,
}

impl Route {
    /// Renders the route as a URL path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Note(note_id) => format!("/note/{note_id}"),
            Route::NewNote => "/new-note".to_string(),
            Route::EditNote(note_id) => format!("/edit-note/{note_id}"),
            Route::Categories => "/categories".to_string(),
            Route::NotesSearch => "/notes-search".to_string(),
        }
    }

    /// Parses a URL path into a route
    ///
    /// Returns `None` for unknown paths and for parameterized routes with an
    /// empty parameter.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/new-note" => Some(Route::NewNote),
            "/categories" => Some(Route::Categories),
            "/notes-search" => Some(Route::NotesSearch),
            _ => {
                if let Some(note_id) = path.strip_prefix("/note/") {
                    if !note_id.is_empty() && !note_id.contains('/') {
                        return Some(Route::Note(note_id.to_string()));
                    }
                }
                if let Some(note_id) = path.strip_prefix("/edit-note/") {
                    if !note_id.is_empty() && !note_id.contains('/') {
                        return Some(Route::EditNote(note_id.to_string()));
                    }
                }
                None
            }
        }
    }

    /// True for the two routes gated behind redirect-if-authenticated
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
