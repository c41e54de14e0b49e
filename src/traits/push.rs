//! Push notification provider trait abstraction.
//!
//! Stands in for the platform notification service: permission handling and
//! push token issuance.

use async_trait::async_trait;

use crate::push::PushError;

/// Notification permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not been asked yet
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Trait for the platform notification service.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Current permission without prompting.
    async fn permission_status(&self) -> Result<PermissionStatus, PushError>;

    /// Ask for permission; returns the resulting status.
    async fn request_permission(&self) -> Result<PermissionStatus, PushError>;

    /// Issue a push token for this installation, scoped by `project_id`.
    async fn push_token(&self, project_id: &str) -> Result<String, PushError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_is_granted() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());
        assert!(!PermissionStatus::Undetermined.is_granted());
    }
}
