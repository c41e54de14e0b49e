//! Unified error type for the shell.
//!
//! Each seam has its own error enum (`HttpError`, `StoreError`,
//! `PushError`, `ConfigError`); `ShellError` wraps them for code that
//! crosses seams, such as building the production controller or the
//! headless CLI commands.
//!
//! | Source | Reaches the user? |
//! |--------|-------------------|
//! | Login rejected / transport | Yes, as an alert |
//! | Push permission / registration | No, logged only |
//! | Store failure during logout | No, logged only |
//! | Configuration | Yes, at startup |

use thiserror::Error;

use crate::config::ConfigError;
use crate::push::PushError;
use crate::traits::{HttpError, StoreError};

/// Convenient result alias.
pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Secure storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Push registration error: {0}")]
    Push(#[from] PushError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::Config(_) => "E_CONFIG",
            ShellError::Store(_) => "E_STORE",
            ShellError::Http(err) => http_code(err),
            ShellError::Push(err) => push_code(err),
            ShellError::Io(_) => "E_IO",
        }
    }

    /// Message suitable for printing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::Config(err) => format!("Invalid configuration: {}", err),
            ShellError::Store(_) => {
                "Could not access secure storage. Check permissions on ~/.tracker-shell."
                    .to_string()
            }
            ShellError::Http(HttpError::Timeout(_)) => {
                "The server took too long to respond.".to_string()
            }
            ShellError::Http(_) => {
                "Could not reach the server. Check your connection.".to_string()
            }
            ShellError::Push(_) => "Push notifications could not be set up.".to_string(),
            ShellError::Io(err) => format!("IO error: {}", err),
        }
    }
}

fn http_code(err: &HttpError) -> &'static str {
    match err {
        HttpError::ConnectionFailed(_) => "E_HTTP_CONNECT",
        HttpError::Timeout(_) => "E_HTTP_TIMEOUT",
        HttpError::InvalidUrl(_) => "E_HTTP_URL",
        HttpError::Io(_) => "E_HTTP_IO",
        HttpError::Other(_) => "E_HTTP",
    }
}

/// Codes for push failures, also used when they are only logged.
pub fn push_code(err: &PushError) -> &'static str {
    match err {
        PushError::MissingProjectId => "E_PUSH_PROJECT",
        PushError::MissingApiCredentials => "E_PUSH_API_CREDS",
        PushError::TokenUnavailable(_) => "E_PUSH_TOKEN",
        PushError::UnexpectedStatus { .. } => "E_PUSH_STATUS",
        PushError::InvalidResponse(_) => "E_PUSH_RESPONSE",
        PushError::Encode(_) => "E_PUSH_ENCODE",
        PushError::Http(err) => http_code(err),
        PushError::Store(_) => "E_STORE",
    }
}
