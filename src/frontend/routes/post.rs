//! Post Route
//!
//! POST /post - accept a form submission and forward it to the backend.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::{BackendClient, NewEntry};
use crate::frontend::error::{FrontendError, FrontendResult};
use crate::frontend::state::AppState;

/// Form fields from the home page submission. Absent fields are treated as
/// empty so they fail validation rather than form decoding.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// POST /post
///
/// Validates the submission and forwards it to the backend. Validation and
/// backend failures become a 400 with the error text; success redirects the
/// browser back to the home page with a 302.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> FrontendResult<impl IntoResponse> {
    save_message(&state.backend, form.name, form.message).await?;

    Ok((
        StatusCode::FOUND,
        AppendHeaders([(header::LOCATION, "/")]),
    ))
}

/// Validate a submission and persist it through the backend.
///
/// Empty fields are rejected before any network call is made. The date is
/// not sent; the backend assigns it.
pub async fn save_message(
    backend: &BackendClient,
    author: String,
    message: String,
) -> FrontendResult<()> {
    if author.is_empty() {
        return Err(FrontendError::Validation("name required"));
    }
    if message.is_empty() {
        return Err(FrontendError::Validation("message required"));
    }

    let entry = NewEntry { author, message };
    backend
        .post_message(&entry)
        .await
        .map_err(FrontendError::Save)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here; validation failures must short-circuit before
    // any network call happens.
    fn unreachable_backend() -> BackendClient {
        BackendClient::new("127.0.0.1:1")
    }

    #[tokio::test]
    async fn test_save_message_empty_author() {
        let backend = unreachable_backend();
        let err = save_message(&backend, String::new(), "hi".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, FrontendError::Validation("name required")));
    }

    #[tokio::test]
    async fn test_save_message_empty_message() {
        let backend = unreachable_backend();
        let err = save_message(&backend, "a".to_string(), String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, FrontendError::Validation("message required")));
    }

    #[test]
    fn test_form_defaults_missing_fields_to_empty() {
        let form: PostForm = serde_urlencoded::from_str("").unwrap();
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
    }
}
