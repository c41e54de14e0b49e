//! Shared helpers for integration tests.

#![allow(dead_code)]

use tempfile::TempDir;
use tracker_shell::adapters::mock::MockPushProvider;
use tracker_shell::adapters::{FileSecureStore, ReqwestHttpClient};
use tracker_shell::app::ViewController;
use tracker_shell::config::ShellConfig;
use wiremock::MockServer;

pub const EMAIL: &str = "a@x.com";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "tok-123";

/// `Expo Token` document path for [`EMAIL`] and [`TOKEN`], as sent on the wire.
pub const DOC_PATH: &str = "/api/resource/Expo%20Token/a%40x.com-tok-123";

pub const COLLECTION_PATH: &str = "/api/resource/Expo%20Token";

pub const AUTHORIZATION: &str = "token test-key:test-secret";

pub type TestController = ViewController<FileSecureStore, ReqwestHttpClient, MockPushProvider>;

/// Config pointing at the mock server with a store inside `dir`.
pub fn test_config(server: &MockServer, dir: &TempDir) -> ShellConfig {
    ShellConfig::new()
        .with_base_url(server.uri())
        .with_api_credentials("test-key", "test-secret")
        .with_expo_project_id("project-1")
        .with_store_path(dir.path().join("secure-store.json"))
}

/// Real HTTP client and file store; only the push provider is scripted.
pub fn controller(config: &ShellConfig, provider: MockPushProvider) -> TestController {
    let store = FileSecureStore::from_config(config).unwrap();
    ViewController::new(store, ReqwestHttpClient::new(), provider, config)
}

pub fn store(config: &ShellConfig) -> FileSecureStore {
    FileSecureStore::from_config(config).unwrap()
}
