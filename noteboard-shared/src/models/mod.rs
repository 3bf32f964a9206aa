//! Resource models
//!
//! These structs mirror the JSON the API serves. Keys are camelCase on the
//! wire and entity ids arrive under `_id`.

pub mod category;
pub mod note;
pub mod session;
pub mod user;

pub use category::Category;
pub use note::{Assignee, Note};
pub use session::Session;
pub use user::{User, UserMatch};
