//! Mock implementations for testing.
//!
//! Test doubles for every trait in `crate::traits`, so the controller can be
//! exercised without network or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses
//! - [`InMemoryStore`] - In-memory secure store
//! - [`MockPushProvider`] - Scriptable permission and push token

pub mod http;
pub mod push;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use push::MockPushProvider;
pub use store::InMemoryStore;
