//! Application State
//!
//! Shared state accessible by all route handlers. Everything here is
//! read-only after startup, so handlers share it through an `Arc` with no
//! locking.

use crate::backend::BackendClient;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the backend message API
    pub backend: Arc<BackendClient>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a backend client
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            backend,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
