//! The `Expo Token` document stored in the backend.

use serde::{Deserialize, Serialize};

/// Doctype holding one document per (email, push token) pair.
pub const EXPO_TOKEN_DOCTYPE: &str = "Expo Token";

/// Body of the create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpoTokenRecord {
    /// Document name, `<email>-<token>`
    pub name: String,
    pub email: String,
    pub token: String,
}

impl ExpoTokenRecord {
    pub fn new(email: &str, token: &str) -> Self {
        Self {
            name: record_name(email, token),
            email: email.to_string(),
            token: token.to_string(),
        }
    }
}

/// Document name for a pair. The backend uses it as the primary key.
pub fn record_name(email: &str, token: &str) -> String {
    format!("{}-{}", email, token)
}
