//! In-memory secure store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{SecureStore, StoreError};

/// In-memory [`SecureStore`] with per-operation failure injection.
///
/// Clones share the same map, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    get_should_fail: Arc<Mutex<bool>>,
    set_should_fail: Arc<Mutex<bool>>,
    delete_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value synchronously (for assertions).
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Seed a value synchronously.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_delete_should_fail(&self, should_fail: bool) {
        *self.delete_should_fail.lock().unwrap() = should_fail;
    }
}

#[async_trait]
impl SecureStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StoreError::Unavailable("Mock get failure".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                message: "Mock set failure".to_string(),
            });
        }
        self.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        if *self.delete_should_fail.lock().unwrap() {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                message: "Mock delete failure".to_string(),
            });
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
