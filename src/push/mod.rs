//! Push notification token registration.
//!
//! - [`record`] - the `Expo Token` resource document
//! - [`registrar`] - permission, token issuance and remote upsert/delete

pub mod record;
pub mod registrar;

pub use record::{ExpoTokenRecord, EXPO_TOKEN_DOCTYPE};
pub use registrar::{PushRegistrar, RegistrationOutcome, UpsertOutcome};

use thiserror::Error;

use crate::traits::{HttpError, StoreError};

/// Errors from the push registration path.
///
/// None of these reach the user: the controller logs them and moves on.
#[derive(Debug, Clone, Error)]
pub enum PushError {
    #[error("No push project id configured")]
    MissingProjectId,

    #[error("Resource API key/secret not configured")]
    MissingApiCredentials,

    #[error("Push token unavailable: {0}")]
    TokenUnavailable(String),

    #[error("{operation} returned HTTP {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
