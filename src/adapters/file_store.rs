//! File-backed secure store.
//!
//! Values live in a flat JSON object in `~/.tracker-shell/secure-store.json`.
//! The directory is owner-only (`0700`) and the file `0600` on unix; there is
//! no encryption beyond that. Writes replace the file atomically via a
//! sibling temp file.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::config::{data_dir, ShellConfig};
use crate::traits::{SecureStore, StoreError};

/// [`SecureStore`] persisted to a single JSON file.
#[derive(Debug)]
pub struct FileSecureStore {
    path: PathBuf,
    /// Parent directory is reset to `0700` on every write, even if it
    /// already existed
    private_dir: bool,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileSecureStore {
    /// A parent directory created by the store is made `0700`; an existing
    /// one is left alone.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private_dir: false,
            lock: Mutex::new(()),
        }
    }

    /// Treat the parent directory as owned by the store.
    pub fn with_private_dir(mut self) -> Self {
        self.private_dir = true;
        self
    }

    /// Store at the configured (or default) location. A store inside the
    /// data directory keeps that directory private.
    pub fn from_config(config: &ShellConfig) -> Result<Self, StoreError> {
        let path = config
            .resolved_store_path()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let in_data_dir = match data_dir() {
            Ok(dir) => path.parent() == Some(dir.as_path()),
            Err(_) => false,
        };

        let store = Self::new(path);
        Ok(if in_data_dir {
            store.with_private_dir()
        } else {
            store
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let created = !parent.exists();
                if created {
                    fs::create_dir_all(parent).await?;
                }
                if created || self.private_dir {
                    restrict_permissions(parent, 0o700).await?;
                }
            }
        }

        let data =
            serde_json::to_vec_pretty(values).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&tmp).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        drop(file);

        // a stale temp file keeps its old mode
        restrict_permissions(&tmp, 0o600).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path, mode: u32) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path, _mode: u32) -> Result<(), StoreError> {
    Ok(())
}

#[async_trait]
impl SecureStore for FileSecureStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await.map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&values).await.map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
