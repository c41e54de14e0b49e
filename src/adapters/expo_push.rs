//! Expo push service adapter.
//!
//! Exchanges the device's native push token for an Expo push token via the
//! public `getExpoPushToken` endpoint. Permission is the consent recorded in
//! configuration: a terminal has no system prompt to show.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ShellConfig;
use crate::push::PushError;
use crate::traits::{Headers, HttpClient, PermissionStatus, PushProvider};

/// Identifies this client to the push service.
pub const APP_ID: &str = "tracker-shell";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    device_id: String,
    development: bool,
    app_id: &'a str,
    project_id: &'a str,
    device_push_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    data: TokenData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenData {
    expo_push_token: String,
}

/// [`PushProvider`] backed by the Expo push API.
pub struct ExpoPushProvider<H> {
    http: H,
    token_url: String,
    device_push_token: Option<String>,
    notifications_enabled: bool,
    device_id: Uuid,
}

impl<H: HttpClient> ExpoPushProvider<H> {
    pub fn new(http: H, config: &ShellConfig) -> Self {
        Self {
            http,
            token_url: config.expo_token_url.clone(),
            device_push_token: config.device_push_token.clone(),
            notifications_enabled: config.notifications_enabled,
            device_id: installation_id(),
        }
    }

    pub fn device_id(&self) -> Uuid {
        self.device_id
    }

    fn consent(&self) -> PermissionStatus {
        if self.notifications_enabled {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

/// Stable per-host id: a v5 UUID of the host name.
pub fn installation_id() -> Uuid {
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string());
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, host.as_bytes())
}

#[async_trait]
impl<H: HttpClient> PushProvider for ExpoPushProvider<H> {
    async fn permission_status(&self) -> Result<PermissionStatus, PushError> {
        Ok(self.consent())
    }

    async fn request_permission(&self) -> Result<PermissionStatus, PushError> {
        Ok(self.consent())
    }

    async fn push_token(&self, project_id: &str) -> Result<String, PushError> {
        let device_push_token = self.device_push_token.as_deref().ok_or_else(|| {
            PushError::TokenUnavailable("no device push token configured".to_string())
        })?;

        let request = TokenRequest {
            kind: "fcm",
            device_id: self.device_id.to_string(),
            development: false,
            app_id: APP_ID,
            project_id,
            device_push_token,
        };
        let body = serde_json::to_string(&request).map_err(|e| PushError::Encode(e.to_string()))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.post(&self.token_url, &body, &headers).await?;
        if !response.is_success() {
            return Err(PushError::UnexpectedStatus {
                operation: "issue push token",
                status: response.status,
            });
        }

        let parsed: TokenResponse = response
            .json()
            .map_err(|e| PushError::InvalidResponse(e.to_string()))?;
        Ok(parsed.data.expo_push_token)
    }
}
