//! Tracker Shell - a terminal client for the leads tracker web application.
//!
//! Logs in against the tracker backend, keeps the session flag in a
//! private on-disk store, registers the device for push notifications and
//! hands the web application off to the system browser.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod push;
pub mod terminal;
pub mod traits;
pub mod ui;
