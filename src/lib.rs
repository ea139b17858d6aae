//! # Guestbook Frontend
//!
//! Web frontend for the guestbook: renders an HTML page of messages fetched
//! from the backend API and forwards new submissions to it as JSON.
//!
//! ## Modules
//!
//! - [`config`]: Environment-variable configuration
//! - [`backend`]: HTTP client for the backend message API
//! - [`templates`]: HTML templates and the elapsed-time helper
//! - [`frontend`]: Axum HTTP server with the `/` and `/post` routes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guestbook_frontend::backend::BackendClient;
//! use guestbook_frontend::config::Config;
//! use guestbook_frontend::frontend::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = Arc::new(BackendClient::new(config.backend_addr.clone()));
//!     let state = AppState::new(backend);
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod frontend;
pub mod templates;

// Re-export top-level types for convenience
pub use backend::{BackendClient, BackendError, GuestbookEntry, NewEntry};
pub use config::{Config, ConfigError};
pub use frontend::{build_router, serve, AppState, FrontendError};
pub use templates::{format_elapsed, HomeTemplate};
