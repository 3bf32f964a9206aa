//! Configuration management
//!
//! Loads configuration from environment variables into a typed struct.
//!
//! # Environment Variables
//!
//! - `NOTEBOARD_API_URL`: base URL of the API (default: http://localhost:8080)
//! - `NOTEBOARD_SESSION_FILE`: where the session is persisted
//!   (default: `$HOME/.noteboard/session.json`)
//! - `NOTEBOARD_PER_PAGE`: page size for lists (default: 5)
//! - `RUST_LOG`: log level

use std::env;
use std::path::{Path, PathBuf};

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Noteboard API
    pub api_url: String,

    /// Path of the session file (the local-storage analogue)
    pub session_file: PathBuf,

    /// Page size used by list and search requests
    pub per_page: u32,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `NOTEBOARD_PER_PAGE` is present but not a
    /// positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_url = env::var("NOTEBOARD_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let session_file = env::var("NOTEBOARD_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let per_page = env::var("NOTEBOARD_PER_PAGE")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()?;

        if per_page == 0 {
            anyhow::bail!("NOTEBOARD_PER_PAGE must be at least 1");
        }

        Ok(Self {
            api_url,
            session_file,
            per_page,
        })
    }
}

/// Session file under the home directory, or the working directory when the
/// home directory is unknown
fn default_session_file() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".noteboard").join("session.json"),
        None => PathBuf::from(".noteboard-session.json"),
    }
}
