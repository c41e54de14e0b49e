//! Typed access to the two persisted session values.
//!
//! Only the session flag and the push token are ever persisted. Email and
//! password live in the login form and nowhere else.

use crate::traits::{SecureStore, StoreError};

/// Session flag key; value is `"true"` or absent.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Push token saved at login so logout can delete the remote record.
pub const PUSH_TOKEN_KEY: &str = "expoPushToken";

const LOGGED_IN_VALUE: &str = "true";

/// Session flags on top of a [`SecureStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: SecureStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &S {
        &self.store
    }

    /// Anything other than the exact string `"true"` reads as logged out.
    pub async fn is_logged_in(&self) -> Result<bool, StoreError> {
        Ok(self.store.get(IS_LOGGED_IN_KEY).await?.as_deref() == Some(LOGGED_IN_VALUE))
    }

    pub async fn mark_logged_in(&self) -> Result<(), StoreError> {
        self.store.set(IS_LOGGED_IN_KEY, LOGGED_IN_VALUE).await
    }

    pub async fn clear_logged_in(&self) -> Result<(), StoreError> {
        self.store.delete(IS_LOGGED_IN_KEY).await
    }

    pub async fn push_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(PUSH_TOKEN_KEY).await
    }

    pub async fn save_push_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(PUSH_TOKEN_KEY, token).await
    }

    pub async fn clear_push_token(&self) -> Result<(), StoreError> {
        self.store.delete(PUSH_TOKEN_KEY).await
    }
}
