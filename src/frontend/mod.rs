//! Guestbook Frontend HTTP Server
//!
//! HTTP surface of the frontend, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - Render the guestbook home page
//! - `POST /post` - Submit a new message, redirect back to `/`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (checks the backend)
//!
//! Method routing returns 405 for a wrong method on a known path; anything
//! else falls through to a 404.
//!
//! # Example
//!
//! ```rust,ignore
//! use guestbook_frontend::backend::BackendClient;
//! use guestbook_frontend::config::Config;
//! use guestbook_frontend::frontend::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = Arc::new(BackendClient::new(config.backend_addr.clone()));
//!     serve(AppState::new(backend), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{FrontendError, FrontendResult};
pub use state::AppState;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Build the frontend router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::home::home))
        .route("/post", post(routes::post::post_message))
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Fallback for paths outside the route table
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "page not found")
}

/// Start the frontend server
pub async fn serve(state: AppState, config: &Config) -> Result<(), std::io::Error> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("frontend server listening on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("frontend server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
