//! Screen state and the interactive loop.
//!
//! - [`ViewController`] - state machine behind the single screen
//! - [`input::map_key`] - key presses to [`Action`]s
//! - [`runner::run`] - event loop driving both

pub mod controller;
pub mod input;
pub mod runner;

pub use controller::{
    Alert, FormField, LoginForm, PushStatus, ViewController, ViewState, LOGIN_ERROR_MESSAGE,
    LOGIN_ERROR_TITLE, LOGIN_FAILED_MESSAGE, LOGIN_FAILED_TITLE,
};
pub use input::{map_key, Action};
pub use runner::run;

use tracing::{info, warn};

use crate::adapters::{ExpoPushProvider, FileSecureStore, ReqwestHttpClient};
use crate::config::ShellConfig;
use crate::error::ShellResult;

/// Controller wired to the real store, network and push service.
pub type ShellController =
    ViewController<FileSecureStore, ReqwestHttpClient, ExpoPushProvider<ReqwestHttpClient>>;

/// Build the production controller from configuration.
pub fn build_controller(config: &ShellConfig) -> ShellResult<ShellController> {
    let store = FileSecureStore::from_config(config)?;
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let provider = ExpoPushProvider::new(http.clone(), config);

    if config.resource_authorization().is_none() {
        warn!("TRACKER_API_KEY/TRACKER_API_SECRET not set, push token records will not be synced");
    }
    info!(
        base_url = %config.base_url,
        store = %store.path().display(),
        "Controller ready"
    );

    Ok(ViewController::new(store, http, provider, config))
}
