//! Backend Message API
//!
//! HTTP client for the backend service that stores and serves guestbook
//! entries. The backend is an external collaborator reachable over plain
//! HTTP+JSON; storage (MongoDB) lives entirely behind it.

pub mod client;

pub use client::{BackendClient, BackendError, GuestbookEntry, NewEntry};
