//! Authentication module.
//!
//! - Login request against the backend
//! - Session flags persisted in the secure store

pub mod login_api;
pub mod session;

pub use login_api::{LoginClient, LoginOutcome};
pub use session::{SessionStore, IS_LOGGED_IN_KEY, PUSH_TOKEN_KEY};
