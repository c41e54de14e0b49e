//! Token record upsert and delete against a mock resource API.

mod common;

use common::*;
use tempfile::TempDir;
use tracker_shell::adapters::mock::MockPushProvider;
use tracker_shell::adapters::ReqwestHttpClient;
use tracker_shell::config::ShellConfig;
use tracker_shell::push::{PushError, PushRegistrar, UpsertOutcome};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registrar(config: ShellConfig) -> PushRegistrar<ReqwestHttpClient, MockPushProvider> {
    PushRegistrar::new(ReqwestHttpClient::new(), MockPushProvider::granted(TOKEN), config)
}

#[tokio::test]
async fn test_upsert_twice_creates_one_record() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // record absent on the first lookup, present afterwards
    Mock::given(method("GET"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "a@x.com-tok-123",
            "email": "a@x.com",
            "token": "tok-123"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let registrar = registrar(test_config(&server, &dir));

    let first = registrar.upsert_remote_record(EMAIL, TOKEN).await.unwrap();
    let second = registrar.upsert_remote_record(EMAIL, TOKEN).await.unwrap();

    assert_eq!(first, UpsertOutcome::Created);
    assert_eq!(second, UpsertOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_create_conflict_counts_as_existing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let outcome = registrar(test_config(&server, &dir))
        .upsert_remote_record(EMAIL, TOKEN)
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_lookup_error_is_unexpected_status() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = registrar(test_config(&server, &dir))
        .upsert_remote_record(EMAIL, TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, PushError::UnexpectedStatus { status: 403, .. }));
}

#[tokio::test]
async fn test_missing_api_credentials_sends_nothing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = ShellConfig::new()
        .with_base_url(server.uri())
        .with_store_path(dir.path().join("store.json"));

    let err = registrar(config)
        .upsert_remote_record(EMAIL, TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, PushError::MissingApiCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_targets_email_token_record() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path(DOC_PATH))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    registrar(test_config(&server, &dir))
        .delete_remote_record(EMAIL, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_missing_record_is_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path(DOC_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = registrar(test_config(&server, &dir))
        .delete_remote_record(EMAIL, TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, PushError::UnexpectedStatus { status: 404, .. }));
}
