//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use tracker_shell::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config).await {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod headless;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use headless::HeadlessLogin;
pub use version::{version_line, VERSION};

use color_eyre::eyre::{eyre, Report};
use color_eyre::Result;
use tracing::error;

use crate::app::{build_controller, PushStatus, ShellController};
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub async fn run_cli_command(command: &CliCommand, config: &ShellConfig) -> Option<Result<()>> {
    let result = match command {
        CliCommand::RunTui => return None,
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Invalid(message) => Err(eyre!("{}", message)),
        CliCommand::Status => run_status(config).await,
        CliCommand::Login { email } => run_login(config, email).await,
        CliCommand::Logout { email } => run_logout(config, email.as_deref()).await,
    };
    Some(result)
}

fn controller(config: &ShellConfig) -> Result<ShellController> {
    build_controller(config).map_err(report)
}

/// Log the error code and detail; the user sees only the short message.
fn report(err: ShellError) -> Report {
    error!(code = err.error_code(), error = %err, "Command failed");
    eyre!("{}", err.user_message())
}

async fn run_status(config: &ShellConfig) -> Result<()> {
    let mut controller = controller(config)?;
    if headless::status(&mut controller).await {
        println!("Logged in");
    } else {
        println!("Logged out");
    }
    Ok(())
}

async fn run_login(config: &ShellConfig, email: &str) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;
    let mut controller = controller(config)?;

    match headless::login(&mut controller, email, &password).await {
        HeadlessLogin::LoggedIn(push) => {
            println!("Logged in as {}", email);
            match push {
                PushStatus::Registered => println!("Push notifications registered"),
                PushStatus::Failed(reason) => {
                    println!("Push notifications unavailable: {}", reason)
                }
                PushStatus::PermissionDenied | PushStatus::NotAttempted => {}
            }
            Ok(())
        }
        HeadlessLogin::AlreadyLoggedIn => {
            println!("Already logged in. Run --logout first to switch accounts.");
            Ok(())
        }
        HeadlessLogin::Failed(alert) => Err(eyre!("{}: {}", alert.title, alert.message)),
    }
}

async fn run_logout(config: &ShellConfig, email: Option<&str>) -> Result<()> {
    let mut controller = controller(config)?;
    headless::logout(&mut controller, email).await;
    println!("Logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{HttpError, StoreError};

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui, &ShellConfig::new()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_invalid_is_error() {
        let command = CliCommand::Invalid("bad".to_string());
        let result = run_cli_command(&command, &ShellConfig::new()).await;
        assert!(matches!(result, Some(Err(_))));
    }

    #[tokio::test]
    async fn test_status_with_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::new().with_store_path(dir.path().join("store.json"));
        let result = run_cli_command(&CliCommand::Status, &config).await;
        assert!(matches!(result, Some(Ok(()))));
    }

    #[test]
    fn test_report_shows_user_message() {
        let err: ShellError = StoreError::Unavailable("no home directory".to_string()).into();
        assert_eq!(
            report(err).to_string(),
            "Could not access secure storage. Check permissions on ~/.tracker-shell."
        );

        let err: ShellError = HttpError::Timeout("10s".to_string()).into();
        assert_eq!(report(err).to_string(), "The server took too long to respond.");
    }
}
