//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSecureStore`] - Owner-only JSON file store
//! - [`ExpoPushProvider`] - Push tokens from the Expo push service
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses
//! - [`mock::InMemoryStore`] - In-memory secure storage
//! - [`mock::MockPushProvider`] - Scriptable permission and token

pub mod expo_push;
pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use expo_push::ExpoPushProvider;
pub use file_store::FileSecureStore;
pub use mock::{InMemoryStore, MockHttpClient, MockPushProvider};
pub use reqwest_http::ReqwestHttpClient;
