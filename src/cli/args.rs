//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print whether a session is stored
    Status,
    /// Log in without the TUI; the password is prompted for
    Login { email: String },
    /// Log out without the TUI. The email, when given, lets the remote
    /// push token record be removed too.
    Logout { email: Option<String> },
    /// Arguments that could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments. The first item is the program name.
///
/// ```
/// use tracker_shell::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tracker-shell".to_string(), "--status".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Status);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();

    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--status" => return CliCommand::Status,
            "--login" => {
                return match args.next() {
                    Some(email) if !email.starts_with('-') => CliCommand::Login { email },
                    _ => CliCommand::Invalid("--login requires an email address".to_string()),
                };
            }
            "--logout" => {
                let email = args.next_if(|next| !next.starts_with('-'));
                return CliCommand::Logout { email };
            }
            _ => return CliCommand::Invalid(format!("Unknown argument: {}", arg)),
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["tracker-shell".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse(&["--status"]), CliCommand::Status);
    }

    #[test]
    fn test_parse_login_with_email() {
        assert_eq!(
            parse(&["--login", "a@x.com"]),
            CliCommand::Login {
                email: "a@x.com".to_string()
            }
        );
    }

    #[test]
    fn test_parse_login_without_email() {
        assert!(matches!(parse(&["--login"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--login", "--status"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]), CliCommand::Logout { email: None });
        assert_eq!(
            parse(&["--logout", "a@x.com"]),
            CliCommand::Logout {
                email: Some("a@x.com".to_string())
            }
        );
    }

    #[test]
    fn test_parse_defaults_to_tui() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::Invalid("Unknown argument: --unknown".to_string())
        );
        assert!(matches!(parse(&["a@x.com"]), CliCommand::Invalid(_)));
    }
}
