//! Frontend Error Types
//!
//! Error types for the HTTP routes and their conversion to responses.
//!
//! Bodies are plain text aimed at a browser, and backend failures are
//! surfaced verbatim (status and body included). This is an internal demo
//! application, not a hardened system.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the frontend routes
#[derive(Error, Debug)]
pub enum FrontendError {
    /// Submission failed validation (empty name or message)
    #[error("{0}")]
    Validation(&'static str),

    /// Saving a submission to the backend failed
    #[error("failed to save message: {0}")]
    Save(#[source] BackendError),

    /// Fetching entries from the backend failed
    #[error("querying backend failed: {0}")]
    Backend(#[from] BackendError),

    /// Rendering the home template failed
    #[error("failed to render html template: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        let status = match &self {
            FrontendError::Validation(_) | FrontendError::Save(_) => StatusCode::BAD_REQUEST,
            FrontendError::Backend(_) | FrontendError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::error!(
            request_id = %request_id,
            status = status.as_u16(),
            error = %self,
            "request failed"
        );

        (status, self.to_string()).into_response()
    }
}

/// Result type for frontend route handlers
pub type FrontendResult<T> = Result<T, FrontendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = FrontendError::Validation("name required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_save_failure_maps_to_400() {
        let err = FrontendError::Save(BackendError::BadStatus {
            status: 500,
            body: "boom".to_string(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_failure_maps_to_500() {
        let err = FrontendError::Backend(BackendError::BadStatus {
            status: 503,
            body: "down".to_string(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
