//! Guestbook Frontend Server
//!
//! Run with: cargo run --bin guestbook-frontend
//!
//! # Configuration
//!
//! Environment variables (provided by the Kubernetes deployment manifest):
//! - `GUESTBOOK_API_ADDR`: host:port of the backend message API (required)
//! - `PORT`: port to listen on (required)
//! - `RUST_LOG`: log level (default: info)

use guestbook_frontend::backend::BackendClient;
use guestbook_frontend::config::Config;
use guestbook_frontend::frontend::{serve, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guestbook_frontend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting guestbook frontend v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration from environment; a missing variable is fatal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("backend api address: {}", config.backend_addr);

    let backend = Arc::new(BackendClient::new(config.backend_addr.clone()));
    let state = AppState::new(backend);

    serve(state, &config).await?;

    Ok(())
}
