//! Backend REST API Client
//!
//! HTTP client for communicating with the backend message API.
//!
//! The contract is two endpoints on `http://{addr}`:
//! - `GET /messages` returns 200 with a JSON array of entries
//! - `POST /messages` accepts a JSON entry and returns 200 on success
//!
//! Failures are not retried; every error is surfaced to the caller with the
//! backend status and body intact so the routes can report them verbatim.

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One guestbook message record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub author: String,
    pub message: String,
    /// Assigned by the backend when the entry is persisted.
    pub date: DateTime<Utc>,
}

/// A new submission sent to the backend. The date is intentionally absent:
/// it is assigned server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewEntry {
    pub author: String,
    pub message: String,
}

/// Client for the backend message API
pub struct BackendClient {
    client: Client,
    backend_addr: String,
}

impl BackendClient {
    /// Create a new client for the backend at `backend_addr` (host:port).
    ///
    /// No request timeout is configured; the transport defaults apply.
    pub fn new(backend_addr: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            backend_addr: backend_addr.into(),
        }
    }

    /// Get the backend address this client talks to
    pub fn backend_addr(&self) -> &str {
        &self.backend_addr
    }

    fn messages_url(&self) -> String {
        format!("http://{}/messages", self.backend_addr)
    }

    /// Fetch all guestbook entries from the backend.
    pub async fn list_messages(&self) -> Result<Vec<GuestbookEntry>, BackendError> {
        let response = self
            .client
            .get(self.messages_url())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(BackendError::Request)?;

        if status != StatusCode::OK {
            return Err(BackendError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(input = %body, error = %e, "failed to decode json from the backend api");
            BackendError::Decode(e)
        })
    }

    /// Persist a new entry by posting it to the backend as JSON.
    ///
    /// Succeeds iff the backend responds 200.
    pub async fn post_message(&self, entry: &NewEntry) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.messages_url())
            .json(entry)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

fn classify_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_connect() {
        BackendError::Unavailable(e)
    } else {
        BackendError::Request(e)
    }
}

/// Errors that can occur when communicating with the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    #[error("request to backend failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("got status code {status} from the backend: {body}")]
    BadStatus { status: u16, body: String },

    #[error("could not decode json response from the backend: {0}")]
    Decode(#[source] serde_json::Error),
}
