//! Shell configuration.
//!
//! Defaults point at the production tracker deployment. Everything can be
//! overridden from the environment (or a `.env` file) at startup.
//!
//! The resource API key and secret are deliberately NOT compiled in: a
//! shared static secret shipped inside a client can be extracted by anyone
//! holding the binary. They must be supplied at runtime, and token
//! registration is skipped when they are missing. Moving the upsert/delete
//! calls behind a server endpoint authenticated by the user's own session
//! would remove the need for them entirely.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default backend (login + resource API).
pub const DEFAULT_BASE_URL: &str = "https://erpnoveloffice.in";

/// Default web application opened once logged in.
pub const DEFAULT_APP_URL: &str = "https://erpnoveloffice.in/Leads-Assignment/tracker(apptest)";

/// Expo push token issuance endpoint.
pub const DEFAULT_EXPO_TOKEN_URL: &str = "https://exp.host/--/api/v2/push/getExpoPushToken";

/// Directory under `$HOME` holding the store and the log file.
pub const DATA_DIR: &str = ".tracker-shell";

const STORE_FILE: &str = "secure-store.json";
const LOG_FILE: &str = "tracker-shell.log";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

/// Runtime configuration for the shell.
///
/// Use the builder methods to customize:
///
/// ```ignore
/// use tracker_shell::config::ShellConfig;
///
/// let config = ShellConfig::default()
///     .with_base_url("http://localhost:8000")
///     .with_api_credentials("key", "secret");
/// ```
#[derive(Clone, PartialEq)]
pub struct ShellConfig {
    pub base_url: String,
    pub app_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Project the push token is scoped to
    pub expo_project_id: Option<String>,
    pub expo_token_url: String,
    /// Native (FCM/APNs) token exchanged for a push token
    pub device_push_token: Option<String>,
    /// Whether the user consents to notifications
    pub notifications_enabled: bool,
    pub store_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    /// No timeout unless set
    pub request_timeout: Option<Duration>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            api_key: None,
            api_secret: None,
            expo_project_id: None,
            expo_token_url: DEFAULT_EXPO_TOKEN_URL.to_string(),
            device_push_token: None,
            notifications_enabled: true,
            store_path: None,
            log_path: None,
            request_timeout: None,
        }
    }
}

impl fmt::Debug for ShellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellConfig")
            .field("base_url", &self.base_url)
            .field("app_url", &self.app_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("expo_project_id", &self.expo_project_id)
            .field("expo_token_url", &self.expo_token_url)
            .field(
                "device_push_token",
                &self.device_push_token.as_ref().map(|_| "<redacted>"),
            )
            .field("notifications_enabled", &self.notifications_enabled)
            .field("store_path", &self.store_path)
            .field("log_path", &self.log_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = url.into();
        self
    }

    pub fn with_api_credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self.api_secret = Some(secret.into());
        self
    }

    pub fn with_expo_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.expo_project_id = Some(project_id.into());
        self
    }

    pub fn with_expo_token_url(mut self, url: impl Into<String>) -> Self {
        self.expo_token_url = url.into();
        self
    }

    pub fn with_device_push_token(mut self, token: impl Into<String>) -> Self {
        self.device_push_token = Some(token.into());
        self
    }

    pub fn with_notifications_enabled(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut config = Self::default();

        if let Some(url) = get("TRACKER_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(url) = get("TRACKER_APP_URL") {
            config.app_url = url;
        }
        config.api_key = get("TRACKER_API_KEY");
        config.api_secret = get("TRACKER_API_SECRET");
        config.expo_project_id = get("TRACKER_EXPO_PROJECT_ID");
        if let Some(url) = get("TRACKER_EXPO_TOKEN_URL") {
            config.expo_token_url = url;
        }
        config.device_push_token = get("TRACKER_DEVICE_PUSH_TOKEN");
        config.store_path = get("TRACKER_STORE_PATH").map(PathBuf::from);
        config.log_path = get("TRACKER_LOG_PATH").map(PathBuf::from);

        if let Some(value) = get("TRACKER_NOTIFICATIONS") {
            config.notifications_enabled = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "TRACKER_NOTIFICATIONS",
                        value,
                    })
                }
            };
        }

        if let Some(value) = get("TRACKER_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| ConfigError::Invalid {
                var: "TRACKER_REQUEST_TIMEOUT_SECS",
                value: value.clone(),
            })?;
            if secs > 0 {
                config.request_timeout = Some(Duration::from_secs(secs));
            }
        }

        Ok(config)
    }

    /// `Authorization` header value for the resource API, if configured.
    pub fn resource_authorization(&self) -> Option<String> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some(format!("token {}:{}", key, secret)),
            _ => None,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/method/login", self.base_url)
    }

    /// Collection URL for a resource doctype, e.g. `Expo Token`.
    pub fn resource_url(&self, doctype: &str) -> String {
        format!("{}/api/resource/{}", self.base_url, urlencoding::encode(doctype))
    }

    /// URL of a single named document.
    pub fn document_url(&self, doctype: &str, name: &str) -> String {
        format!("{}/{}", self.resource_url(doctype), urlencoding::encode(name))
    }

    pub fn resolved_store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(STORE_FILE)),
        }
    }

    pub fn resolved_log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(LOG_FILE)),
        }
    }
}

/// `~/.tracker-shell`
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}
