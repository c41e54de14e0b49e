//! Mock push provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::push::PushError;
use crate::traits::{PermissionStatus, PushProvider};

#[derive(Debug)]
struct State {
    status: PermissionStatus,
    /// What a permission prompt resolves to
    answer: PermissionStatus,
    token: Option<String>,
    permission_requests: usize,
    token_requests: Vec<String>,
}

/// Scriptable [`PushProvider`].
#[derive(Debug, Clone)]
pub struct MockPushProvider {
    state: Arc<Mutex<State>>,
}

impl MockPushProvider {
    /// `token: None` makes `push_token` fail with `TokenUnavailable`.
    pub fn new(status: PermissionStatus, token: Option<&str>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                status,
                answer: status,
                token: token.map(str::to_string),
                permission_requests: 0,
                token_requests: Vec::new(),
            })),
        }
    }

    pub fn granted(token: &str) -> Self {
        Self::new(PermissionStatus::Granted, Some(token))
    }

    /// Permission denied, and the prompt is denied as well.
    pub fn denied() -> Self {
        Self::new(PermissionStatus::Denied, None)
    }

    pub fn set_answer(&self, answer: PermissionStatus) {
        self.state.lock().unwrap().answer = answer;
    }

    pub fn permission_requests(&self) -> usize {
        self.state.lock().unwrap().permission_requests
    }

    /// Project ids passed to `push_token`.
    pub fn token_requests(&self) -> Vec<String> {
        self.state.lock().unwrap().token_requests.clone()
    }
}

#[async_trait]
impl PushProvider for MockPushProvider {
    async fn permission_status(&self) -> Result<PermissionStatus, PushError> {
        Ok(self.state.lock().unwrap().status)
    }

    async fn request_permission(&self) -> Result<PermissionStatus, PushError> {
        let mut state = self.state.lock().unwrap();
        state.permission_requests += 1;
        let answer = state.answer;
        state.status = answer;
        Ok(answer)
    }

    async fn push_token(&self, project_id: &str) -> Result<String, PushError> {
        let mut state = self.state.lock().unwrap();
        state.token_requests.push(project_id.to_string());
        state
            .token
            .clone()
            .ok_or_else(|| PushError::TokenUnavailable("Mock has no token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_updates_status() {
        let provider = MockPushProvider::new(PermissionStatus::Undetermined, Some("t"));
        provider.set_answer(PermissionStatus::Denied);

        assert_eq!(
            provider.request_permission().await.unwrap(),
            PermissionStatus::Denied
        );
        assert_eq!(
            provider.permission_status().await.unwrap(),
            PermissionStatus::Denied
        );
        assert_eq!(provider.permission_requests(), 1);
    }

    #[tokio::test]
    async fn test_push_token() {
        let provider = MockPushProvider::granted("ExponentPushToken[x]");
        assert_eq!(
            provider.push_token("proj").await.unwrap(),
            "ExponentPushToken[x]"
        );
        assert_eq!(provider.token_requests(), vec!["proj".to_string()]);

        assert!(MockPushProvider::denied().push_token("proj").await.is_err());
    }
}
