//! Health Routes
//!
//! Health check endpoints for the Kubernetes probes in the deployment
//! manifest.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (backend is reachable)

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::frontend::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 if the backend answers a message query, 503 otherwise. The
/// frontend is useless without its backend, so readiness follows it.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.backend.list_messages().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, uptime_seconds = state.uptime_seconds(), "backend not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
