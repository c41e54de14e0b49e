//! Secure key-value store trait abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Secure storage errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing storage could not be located (e.g. no home directory)
    #[error("Secure storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(String),

    /// The stored data could not be parsed
    #[error("Secure storage is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to write {key}: {message}")]
    WriteFailed { key: String, message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Trait for secure key-value persistence.
///
/// Mirrors the platform secure-storage primitive: string keys, string
/// values, async operations that may fail. Deleting an absent key is not
/// an error.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
