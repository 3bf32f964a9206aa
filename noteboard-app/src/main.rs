//! # Noteboard CLI
//!
//! Command-line client for the Noteboard API. Wires the HTTP client to a
//! file-backed session store, restores any persisted session, and dispatches
//! one command against the in-memory store.

use std::sync::Arc;

use clap::Parser;
use noteboard_app::cli::Cli;
use noteboard_app::config::Config;
use noteboard_app::store::Store;
use noteboard_client::http::ApiClient;
use noteboard_client::session::FileSessionStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noteboard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url.clone());

    tracing::debug!(%api_url, "noteboard v{}", env!("CARGO_PKG_VERSION"));

    let session = Arc::new(FileSessionStore::new(&config.session_file));
    let client = ApiClient::new(api_url, session);
    let store = Store::new(client);
    store.bootstrap();

    noteboard_app::cli::run(&store, &config, cli.command).await
}
