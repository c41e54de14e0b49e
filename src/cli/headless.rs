//! Login, logout and status without the TUI.
//!
//! These drive the same [`ViewController`] as the interactive screen, so
//! alerts and push registration behave identically.

use crate::app::{Alert, PushStatus, ViewController, ViewState};
use crate::traits::{HttpClient, PushProvider, SecureStore};

/// Result of a headless login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessLogin {
    LoggedIn(PushStatus),
    AlreadyLoggedIn,
    Failed(Alert),
}

pub async fn status<S, H, P>(controller: &mut ViewController<S, H, P>) -> bool
where
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    controller.initialize().await == ViewState::LoggedIn
}

pub async fn login<S, H, P>(
    controller: &mut ViewController<S, H, P>,
    email: &str,
    password: &str,
) -> HeadlessLogin
where
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    if controller.initialize().await == ViewState::LoggedIn {
        return HeadlessLogin::AlreadyLoggedIn;
    }

    controller.set_email(email);
    controller.set_password(password);

    if controller.login().await {
        HeadlessLogin::LoggedIn(controller.push_status().clone())
    } else {
        let alert = controller
            .dismiss_alert()
            .unwrap_or_else(Alert::login_error);
        HeadlessLogin::Failed(alert)
    }
}

pub async fn logout<S, H, P>(controller: &mut ViewController<S, H, P>, email: Option<&str>)
where
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    controller.initialize().await;
    if let Some(email) = email {
        controller.set_email(email);
    }
    controller.logout().await;
}
