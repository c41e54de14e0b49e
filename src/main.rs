use color_eyre::Result;
use tracing::info;

use tracker_shell::app::{self, build_controller};
use tracker_shell::cli::{parse_args, run_cli_command, version_line, CliCommand};
use tracker_shell::config::ShellConfig;
use tracker_shell::terminal::{install_panic_hook, TerminalSession};

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        println!("{}", version_line());
        return Ok(());
    }

    color_eyre::install()?;

    let config = ShellConfig::from_env()?;
    tracker_shell::logging::init(&config);
    info!(version = tracker_shell::cli::VERSION, ?command, "Starting tracker shell");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(command, config))
}

async fn run(command: CliCommand, config: ShellConfig) -> Result<()> {
    if let Some(result) = run_cli_command(&command, &config).await {
        return result;
    }

    install_panic_hook();

    let mut controller = build_controller(&config)?;
    let mut session = TerminalSession::start()?;
    let result = app::run(session.terminal(), &mut controller).await;
    session.restore();

    info!("Shutting down");
    result
}
