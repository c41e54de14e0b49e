//! The single screen's state container.
//!
//! ```text
//! Loading --initialize--> LoggedOut --login ok--> LoggedIn
//!                             ^                      |
//!                             +-------logout---------+
//! ```
//!
//! `login` passes through `Loading` while the request is in flight. Push
//! registration runs after the switch to `LoggedIn` and never undoes it;
//! logout always ends in `LoggedOut` whatever the remote delete does.

use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

use crate::auth::{LoginClient, LoginOutcome, SessionStore};
use crate::config::ShellConfig;
use crate::error::push_code;
use crate::push::{PushRegistrar, RegistrationOutcome};
use crate::traits::{HttpClient, PushProvider, SecureStore};

pub const LOGIN_FAILED_TITLE: &str = "Login Failed";
pub const LOGIN_FAILED_MESSAGE: &str = "Please check your credentials and try again.";
pub const LOGIN_ERROR_TITLE: &str = "Login Error";
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Reading the session flag, or a login in flight
    Loading,
    LoggedOut,
    LoggedIn,
}

/// A modal message shown over the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn login_failed() -> Self {
        Self::new(LOGIN_FAILED_TITLE, LOGIN_FAILED_MESSAGE)
    }

    pub fn login_error() -> Self {
        Self::new(LOGIN_ERROR_TITLE, LOGIN_ERROR_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Password,
}

/// Login form contents. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: FormField,
}

impl LoginForm {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}

/// What happened to push registration in this session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PushStatus {
    #[default]
    NotAttempted,
    Registered,
    PermissionDenied,
    Failed(String),
}

/// Orchestrates store, login and push registration for the screen.
pub struct ViewController<S, H, P> {
    session: SessionStore<S>,
    login_client: LoginClient<H>,
    registrar: PushRegistrar<H, P>,
    app_url: String,
    state: ViewState,
    form: LoginForm,
    alerts: VecDeque<Alert>,
    push_status: PushStatus,
}

impl<S, H, P> ViewController<S, H, P>
where
    S: SecureStore,
    H: HttpClient + Clone,
    P: PushProvider,
{
    /// Starts in [`ViewState::Loading`]; call [`Self::initialize`] next.
    pub fn new(store: S, http: H, provider: P, config: &ShellConfig) -> Self {
        Self {
            session: SessionStore::new(store),
            login_client: LoginClient::new(http.clone(), config),
            registrar: PushRegistrar::new(http, provider, config.clone()),
            app_url: config.app_url.clone(),
            state: ViewState::Loading,
            form: LoginForm::default(),
            alerts: VecDeque::new(),
            push_status: PushStatus::NotAttempted,
        }
    }
}

impl<S, H, P> ViewController<S, H, P>
where
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    /// Read the session flag and leave `Loading`.
    pub async fn initialize(&mut self) -> ViewState {
        self.state = match self.session.is_logged_in().await {
            Ok(true) => ViewState::LoggedIn,
            Ok(false) => ViewState::LoggedOut,
            Err(e) => {
                warn!(error = %e, "Could not read session flag, starting logged out");
                ViewState::LoggedOut
            }
        };
        info!(state = ?self.state, "Session restored");
        self.state
    }

    /// Submit the login form. Returns whether the shell is now logged in.
    ///
    /// A failed attempt queues exactly one alert.
    pub async fn login(&mut self) -> bool {
        if self.state != ViewState::LoggedOut {
            debug!(state = ?self.state, "Ignoring login outside the logged-out state");
            return self.state == ViewState::LoggedIn;
        }

        self.state = ViewState::Loading;
        let email = self.form.email.clone();

        let outcome = self.login_client.login(&email, &self.form.password).await;
        match outcome {
            Ok(LoginOutcome::Accepted) => {
                if let Err(e) = self.session.mark_logged_in().await {
                    error!(error = %e, "Failed to persist session flag");
                    return self.fail(Alert::login_error());
                }
                self.state = ViewState::LoggedIn;
                info!(email = %email, "Logged in");

                self.register_push(&email).await;
                true
            }
            Ok(LoginOutcome::Rejected { status }) => {
                debug!(status, "Login rejected");
                self.fail(Alert::login_failed())
            }
            Err(e) => {
                error!(error = %e, "Login request failed");
                self.fail(Alert::login_error())
            }
        }
    }

    /// Best effort: every failure is logged and swallowed.
    async fn register_push(&mut self, email: &str) {
        self.push_status = match self.registrar.register(email, &self.session).await {
            Ok(RegistrationOutcome::Registered { upsert, .. }) => {
                info!(?upsert, "Push notifications registered");
                PushStatus::Registered
            }
            Ok(RegistrationOutcome::PermissionDenied) => {
                info!("Failed to get push token for push notification: permission not granted");
                PushStatus::PermissionDenied
            }
            Err(e) => {
                warn!(code = push_code(&e), error = %e, "Error registering push token");
                PushStatus::Failed(e.to_string())
            }
        };
    }

    fn fail(&mut self, alert: Alert) -> bool {
        self.alerts.push_back(alert);
        self.state = ViewState::LoggedOut;
        false
    }

    /// Delete the remote token record, clear the session flag, reset the form.
    ///
    /// The stored push token is only dropped once the remote delete succeeds.
    /// Nothing here can keep the user logged in.
    pub async fn logout(&mut self) {
        let token = match self.session.push_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not read stored push token");
                None
            }
        };
        let email = self.form.email.clone();

        // Keep the stored token until the remote record is gone.
        match token {
            Some(token) if !email.is_empty() => {
                match self.registrar.delete_remote_record(&email, &token).await {
                    Ok(()) => {
                        if let Err(e) = self.session.clear_push_token().await {
                            warn!(error = %e, "Failed to clear stored push token");
                        }
                    }
                    Err(e) => {
                        error!(code = push_code(&e), error = %e, "Error deleting the push token record");
                    }
                }
            }
            Some(_) => {
                warn!("Email unknown for this session, keeping the push token for a later logout");
            }
            None => debug!("No push token stored"),
        }

        if let Err(e) = self.session.clear_logged_in().await {
            error!(error = %e, "Failed to clear session flag");
        }

        self.state = ViewState::LoggedOut;
        self.form.reset();
        self.push_status = PushStatus::NotAttempted;
        info!("Logged out");
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn push_status(&self) -> &PushStatus {
        &self.push_status
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    pub fn toggle_focus(&mut self) {
        self.form.focus = match self.form.focus {
            FormField::Email => FormField::Password,
            FormField::Password => FormField::Email,
        };
    }

    /// Type into the focused field.
    pub fn push_char(&mut self, c: char) {
        self.form.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.form.focused_mut().pop();
    }

    /// Queue an alert raised outside login (e.g. the browser failing to open).
    pub fn raise_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    /// Alert currently on screen, oldest first.
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }
}
