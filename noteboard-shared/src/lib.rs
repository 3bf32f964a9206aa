//! # Noteboard Shared Library
//!
//! This crate contains the wire-level types shared by the Noteboard HTTP
//! client and the application layer.
//!
//! ## Module Organization
//!
//! - `models`: resource models as the API serves them (note, category, user,
//!   session)
//! - `error`: the generic error body shape returned by the API
//! - `filters`: search filter and sort descriptors for note queries

pub mod error;
pub mod filters;
pub mod models;

/// Current version of the Noteboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
