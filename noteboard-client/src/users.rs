//! User endpoints
//!
//! - `POST /api/user/login` — exchange credentials for a token
//! - `POST /api/user/signup` — register
//! - `GET /api/user/getUsers` — list users (for assignment and filtering)

use crate::error::ClientResult;
use crate::http::ApiClient;
use noteboard_shared::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response: the session parts the client persists
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token
    pub token: String,

    /// Id of the logged-in user
    pub user_id: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// First name
    #[validate(length(min = 1, message = "First name is required"))]
    pub firstname: String,

    /// Last name
    #[validate(length(min = 1, message = "Last name is required"))]
    pub lastname: String,

    /// Unique handle
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Password confirmation, must equal `password`
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Signup response, a bare server message
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    /// Confirmation message, if the server sends one
    #[serde(default)]
    pub message: Option<String>,
}

/// User list response
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    /// All users visible to the caller
    pub users: Vec<User>,
}

impl ApiClient {
    /// Logs in and returns the session parts
    ///
    /// Persisting the session is the caller's job; the store does it on the
    /// fulfilled transition so a failed login leaves storage untouched.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.send(self.post("/api/user/login").json(request)).await
    }

    /// Registers a new account
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<SignupResponse> {
        self.send(self.post("/api/user/signup").json(request)).await
    }

    /// Lists users
    pub async fn get_users(&self) -> ClientResult<UsersResponse> {
        self.send(self.get("/api/user/getUsers")).await
    }
}
