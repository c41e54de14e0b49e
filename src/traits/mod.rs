//! Trait abstractions for dependency injection and testability.
//!
//! Every side effect the shell performs goes through one of these seams so
//! the view controller can be driven entirely by in-memory doubles in tests.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, DELETE)
//! - [`SecureStore`] - Secure key-value persistence
//! - [`PushProvider`] - Notification permission and push token issuance

pub mod http;
pub mod push;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use push::{PermissionStatus, PushProvider};
pub use store::{SecureStore, StoreError};
