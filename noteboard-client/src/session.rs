//! Session persistence
//!
//! The session (bearer token + user id) outlives the process the same way a
//! browser session outlives a tab: it lives in a small JSON file and is read
//! back on startup. The trait exists so the store and the tests can swap in
//! an in-memory implementation.

use noteboard_shared::models::Session;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Errors from session storage
#[derive(Debug, Error)]
pub enum SessionStorageError {
    /// Underlying I/O failure
    #[error("session storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Stored session is not valid JSON
    #[error("session storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistent storage for at most one session
pub trait SessionStore: Send + Sync {
    /// Reads the stored session, if any
    fn load(&self) -> Result<Option<Session>, SessionStorageError>;

    /// Persists the session, replacing any previous one
    fn save(&self, session: &Session) -> Result<(), SessionStorageError>;

    /// Removes the stored session; a no-op when none exists
    fn clear(&self) -> Result<(), SessionStorageError>;
}

/// File-backed session store
///
/// Stores the session as JSON under the `token` / `userId` keys, one file
/// per store. A missing file means no session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let session = serde_json::from_str(&contents)?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory session store for tests and one-shot invocations
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}
