//! Push token registration against the backend resource API.
//!
//! After a successful login the shell asks for notification permission,
//! obtains a push token, remembers it locally and makes sure an
//! `Expo Token` document exists for the (email, token) pair. Logout deletes
//! that document again.
//!
//! The existence check and the create are two separate requests, so two
//! concurrent upserts for the same pair can both see 404. The backend's
//! primary key on the document name settles the race: a 409 on create is
//! reported as [`UpsertOutcome::AlreadyExists`].

use tracing::{debug, info, warn};

use super::record::{ExpoTokenRecord, EXPO_TOKEN_DOCTYPE};
use super::PushError;
use crate::auth::session::SessionStore;
use crate::config::ShellConfig;
use crate::traits::{
    Headers, HttpClient, PermissionStatus, PushProvider, Response, SecureStore,
};

/// Result of [`PushRegistrar::upsert_remote_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    AlreadyExists,
}

/// Result of the full post-login sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { token: String, upsert: UpsertOutcome },
    /// Permission was not granted; nothing was stored
    PermissionDenied,
}

/// Push registration client.
pub struct PushRegistrar<H, P> {
    http: H,
    provider: P,
    config: ShellConfig,
}

impl<H: HttpClient, P: PushProvider> PushRegistrar<H, P> {
    pub fn new(http: H, provider: P, config: ShellConfig) -> Self {
        Self {
            http,
            provider,
            config,
        }
    }

    /// Check the existing permission and only prompt when not yet granted.
    pub async fn request_permission(&self) -> Result<PermissionStatus, PushError> {
        let existing = self.provider.permission_status().await?;
        if existing.is_granted() {
            return Ok(existing);
        }

        debug!(?existing, "Requesting notification permission");
        self.provider.request_permission().await
    }

    /// Obtain a push token scoped by the configured project id.
    pub async fn obtain_token(&self) -> Result<String, PushError> {
        let project_id = self
            .config
            .expo_project_id
            .as_deref()
            .ok_or(PushError::MissingProjectId)?;

        let token = self.provider.push_token(project_id).await?;
        debug!(token = %token, "Push notification token obtained");
        Ok(token)
    }

    /// Make sure the `<email>-<token>` document exists.
    pub async fn upsert_remote_record(
        &self,
        email: &str,
        token: &str,
    ) -> Result<UpsertOutcome, PushError> {
        let mut headers = self.auth_headers()?;
        let record = ExpoTokenRecord::new(email, token);
        let url = self.config.document_url(EXPO_TOKEN_DOCTYPE, &record.name);

        let existing = self.http.get(&url, &headers).await?;
        if existing.is_success() {
            debug!(name = %record.name, "Token record already exists");
            return Ok(UpsertOutcome::AlreadyExists);
        }
        if existing.status != 404 {
            return Err(unexpected("look up token record", &existing));
        }

        let body = serde_json::to_string(&record).map_err(|e| PushError::Encode(e.to_string()))?;
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let created = self
            .http
            .post(&self.config.resource_url(EXPO_TOKEN_DOCTYPE), &body, &headers)
            .await?;

        match created.status {
            status if (200..300).contains(&status) => {
                info!(name = %record.name, "Token record created");
                Ok(UpsertOutcome::Created)
            }
            409 => {
                debug!(name = %record.name, "Token record created concurrently");
                Ok(UpsertOutcome::AlreadyExists)
            }
            _ => Err(unexpected("create token record", &created)),
        }
    }

    /// Delete the `<email>-<token>` document.
    pub async fn delete_remote_record(&self, email: &str, token: &str) -> Result<(), PushError> {
        let headers = self.auth_headers()?;
        let name = super::record::record_name(email, token);
        let url = self.config.document_url(EXPO_TOKEN_DOCTYPE, &name);

        let response = self.http.delete(&url, &headers).await?;
        if !response.is_success() {
            return Err(unexpected("delete token record", &response));
        }

        info!(name = %name, "Token record deleted");
        Ok(())
    }

    /// Post-login sequence: permission, token, local save, remote upsert.
    pub async fn register<S: SecureStore>(
        &self,
        email: &str,
        session: &SessionStore<S>,
    ) -> Result<RegistrationOutcome, PushError> {
        let permission = self.request_permission().await?;
        if !permission.is_granted() {
            warn!(?permission, "Notification permission not granted, skipping push registration");
            return Ok(RegistrationOutcome::PermissionDenied);
        }

        let token = self.obtain_token().await?;
        session.save_push_token(&token).await?;
        let upsert = self.upsert_remote_record(email, &token).await?;

        Ok(RegistrationOutcome::Registered { token, upsert })
    }

    fn auth_headers(&self) -> Result<Headers, PushError> {
        let authorization = self
            .config
            .resource_authorization()
            .ok_or(PushError::MissingApiCredentials)?;

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), authorization);
        Ok(headers)
    }
}

fn unexpected(operation: &'static str, response: &Response) -> PushError {
    PushError::UnexpectedStatus {
        operation,
        status: response.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, MockHttpClient, MockPushProvider, MockResponse};
    use crate::auth::session::PUSH_TOKEN_KEY;

    const BASE: &str = "http://erp.test";
    const DOC_URL: &str = "http://erp.test/api/resource/Expo%20Token/a%40x.com-tok";
    const COLLECTION_URL: &str = "http://erp.test/api/resource/Expo%20Token";

    fn config() -> ShellConfig {
        ShellConfig::new()
            .with_base_url(BASE)
            .with_api_credentials("key", "secret")
            .with_expo_project_id("proj")
    }

    fn registrar(
        http: &MockHttpClient,
        provider: MockPushProvider,
    ) -> PushRegistrar<MockHttpClient, MockPushProvider> {
        PushRegistrar::new(http.clone(), provider, config())
    }

    #[tokio::test]
    async fn test_request_permission_skips_prompt_when_granted() {
        let provider = MockPushProvider::granted("tok");
        let registrar = registrar(&MockHttpClient::new(), provider.clone());

        let status = registrar.request_permission().await.unwrap();
        assert_eq!(status, PermissionStatus::Granted);
        assert_eq!(provider.permission_requests(), 0);
    }

    #[tokio::test]
    async fn test_request_permission_prompts_when_undetermined() {
        let provider = MockPushProvider::new(PermissionStatus::Undetermined, Some("tok"));
        provider.set_answer(PermissionStatus::Granted);
        let registrar = registrar(&MockHttpClient::new(), provider.clone());

        let status = registrar.request_permission().await.unwrap();
        assert_eq!(status, PermissionStatus::Granted);
        assert_eq!(provider.permission_requests(), 1);
    }

    #[tokio::test]
    async fn test_obtain_token_requires_project_id() {
        let registrar = PushRegistrar::new(
            MockHttpClient::new(),
            MockPushProvider::granted("tok"),
            ShellConfig::new(),
        );
        assert!(matches!(
            registrar.obtain_token().await,
            Err(PushError::MissingProjectId)
        ));
    }

    #[tokio::test]
    async fn test_upsert_creates_when_missing() {
        let http = MockHttpClient::new();
        http.push_response("GET", DOC_URL, MockResponse::status(404));
        http.push_response("POST", COLLECTION_URL, MockResponse::status(200));

        let outcome = registrar(&http, MockPushProvider::granted("tok"))
            .upsert_remote_record("a@x.com", "tok")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);

        let requests = http.get_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"token key:secret".to_string())
        );
        assert_eq!(requests[1].method, "POST");
        assert_eq!(
            requests[1].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        let body: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "a@x.com-tok", "email": "a@x.com", "token": "tok"})
        );
    }

    #[tokio::test]
    async fn test_upsert_skips_create_when_present() {
        let http = MockHttpClient::new();
        http.push_response("GET", DOC_URL, MockResponse::status(200));

        let outcome = registrar(&http, MockPushProvider::granted("tok"))
            .upsert_remote_record("a@x.com", "tok")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::AlreadyExists);
        assert_eq!(http.requests_with_method("POST").len(), 0);
    }

    #[tokio::test]
    async fn test_upsert_conflict_is_success() {
        let http = MockHttpClient::new();
        http.push_response("GET", DOC_URL, MockResponse::status(404));
        http.push_response("POST", COLLECTION_URL, MockResponse::status(409));

        let outcome = registrar(&http, MockPushProvider::granted("tok"))
            .upsert_remote_record("a@x.com", "tok")
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::AlreadyExists);
    }

    #[tokio::test]
    async fn test_upsert_unexpected_lookup_status() {
        let http = MockHttpClient::new();
        http.push_response("GET", DOC_URL, MockResponse::status(403));

        let err = registrar(&http, MockPushProvider::granted("tok"))
            .upsert_remote_record("a@x.com", "tok")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PushError::UnexpectedStatus { status: 403, .. }
        ));
        assert_eq!(http.requests_with_method("POST").len(), 0);
    }

    #[tokio::test]
    async fn test_upsert_without_api_credentials_sends_nothing() {
        let http = MockHttpClient::new();
        let registrar = PushRegistrar::new(
            http.clone(),
            MockPushProvider::granted("tok"),
            ShellConfig::new().with_base_url(BASE),
        );

        let err = registrar.upsert_remote_record("a@x.com", "tok").await.unwrap_err();
        assert!(matches!(err, PushError::MissingApiCredentials));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_remote_record() {
        let http = MockHttpClient::new();
        http.push_response("DELETE", DOC_URL, MockResponse::status(202));

        registrar(&http, MockPushProvider::granted("tok"))
            .delete_remote_record("a@x.com", "tok")
            .await
            .unwrap();

        let deletes = http.requests_with_method("DELETE");
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].url, DOC_URL);
    }

    #[tokio::test]
    async fn test_delete_failure_is_error() {
        let http = MockHttpClient::new();
        http.push_response("DELETE", DOC_URL, MockResponse::status(404));

        let err = registrar(&http, MockPushProvider::granted("tok"))
            .delete_remote_record("a@x.com", "tok")
            .await
            .unwrap_err();
        assert!(matches!(err, PushError::UnexpectedStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_register_saves_token_and_upserts() {
        let http = MockHttpClient::new();
        http.push_response("GET", DOC_URL, MockResponse::status(404));
        http.push_response("POST", COLLECTION_URL, MockResponse::status(200));
        let session = SessionStore::new(InMemoryStore::new());

        let outcome = registrar(&http, MockPushProvider::granted("tok"))
            .register("a@x.com", &session)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RegistrationOutcome::Registered {
                token: "tok".to_string(),
                upsert: UpsertOutcome::Created
            }
        );
        assert_eq!(session.inner().value(PUSH_TOKEN_KEY), Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_register_permission_denied_stores_nothing() {
        let http = MockHttpClient::new();
        let session = SessionStore::new(InMemoryStore::new());

        let outcome = registrar(&http, MockPushProvider::denied())
            .register("a@x.com", &session)
            .await
            .unwrap();

        assert_eq!(outcome, RegistrationOutcome::PermissionDenied);
        assert!(session.inner().value(PUSH_TOKEN_KEY).is_none());
        assert!(http.get_requests().is_empty());
    }
}
