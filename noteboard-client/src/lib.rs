//! # Noteboard HTTP Client
//!
//! Typed client for the Noteboard REST API. One [`ApiClient`] wraps a
//! `reqwest` client plus a [`session::SessionStore`]: the bearer token is
//! attached to every request when a session exists, and the two expiry
//! markers the server uses (`500 "jwt expired"`, `401 "Not authenticated."`)
//! are classified as [`error::ClientError::SessionExpired`] so the caller
//! can force a logout.
//!
//! ## Module Organization
//!
//! - `http`: the client core (URL joining, bearer attachment, response
//!   decoding)
//! - `session`: session persistence behind a trait, with file-backed and
//!   in-memory implementations
//! - `categories`, `notes`, `users`: one module per resource, holding the
//!   request/response types and the endpoint methods
//! - `error`: the client error enum

pub mod categories;
pub mod error;
pub mod http;
pub mod notes;
pub mod session;
pub mod users;

pub use error::ClientError;
pub use http::ApiClient;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
