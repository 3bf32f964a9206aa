//! # Noteboard Application Library
//!
//! The state-management layer of the Noteboard client, plus the pieces the
//! CLI front end is built from.
//!
//! ## Modules
//!
//! - `config`: environment-based configuration
//! - `router`: client routes and path mapping
//! - `store`: the state container — three resource slices (category, note,
//!   user) with their async request lifecycle
//! - `cli`: clap command definitions and command execution

pub mod cli;
pub mod config;
pub mod router;
pub mod store;
