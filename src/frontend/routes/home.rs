//! Home Route
//!
//! GET / - fetch all entries from the backend and render the home page.

use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::frontend::error::FrontendResult;
use crate::frontend::state::AppState;
use crate::templates::HomeTemplate;

/// GET /
///
/// Queries the backend for the full entry list and renders it. Any backend,
/// decode, or render failure becomes a 500 with the error detail in the body.
pub async fn home(State(state): State<Arc<AppState>>) -> FrontendResult<Html<String>> {
    tracing::debug!("querying backend for entries");
    let messages = state.backend.list_messages().await?;
    tracing::info!(count = messages.len(), "retrieved messages from the backend api");

    let page = HomeTemplate { messages };
    Ok(Html(page.render()?))
}
