//! User slice
//!
//! Owns the user list and the login state. Session persistence is the
//! store's job; these reducers only mirror it into memory.

use noteboard_client::users::{LoginResponse, UsersResponse};
use noteboard_shared::error::ErrorBody;
use noteboard_shared::models::{Session, User};

/// User slice state
#[derive(Debug, Clone, Default)]
pub struct UserState {
    /// All users visible to the caller (for assignment and filters)
    pub users: Vec<User>,

    /// Whether a session is active
    pub logged_in: bool,

    /// Id of the logged-in user
    pub user_id: Option<String>,

    /// Bearer token of the active session
    pub token: Option<String>,

    /// Whether a request is in flight
    pub is_loading: bool,

    /// Last error body, cleared by any fulfilled request
    pub error: Option<ErrorBody>,

    /// Request generation, bumped by every dispatch
    generation: u64,
}

impl UserState {
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.generation
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Fulfilled login
    pub(crate) fn login_fulfilled(&mut self, response: &LoginResponse) {
        self.logged_in = true;
        self.user_id = Some(response.user_id.clone());
        self.token = Some(response.token.clone());
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled signup; the user still has to log in
    pub(crate) fn signup_fulfilled(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled user-list fetch
    pub(crate) fn users_fetched(&mut self, response: UsersResponse) {
        self.users = response.users;
        self.is_loading = false;
        self.error = None;
    }

    /// Marks the user logged in from a stored session, without server
    /// re-validation; validity surfaces lazily on the first failing call
    pub(crate) fn set_logged_in(&mut self, session: &Session) {
        self.logged_in = true;
        self.user_id = Some(session.user_id.clone());
        self.token = Some(session.token.clone());
        self.error = None;
        self.is_loading = false;
    }

    /// Drops the in-memory session (logout or forced expiry)
    pub(crate) fn logged_out(&mut self) {
        self.logged_in = false;
        self.user_id = None;
        self.token = None;
    }

    /// Rejected request: stale data stays in place
    pub(crate) fn request_failed(&mut self, error: Option<ErrorBody>) {
        self.is_loading = false;
        if let Some(body) = error {
            self.error = Some(body);
        }
    }
}
