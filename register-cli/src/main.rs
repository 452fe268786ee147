//! Register CLI - interactive registration in your terminal

use std::num::NonZeroU32;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use register_core::{EntryPoint, LoggingService, RegistrationSession, SessionConfig};
use tracing_subscriber::EnvFilter;

mod console;
mod output;

use console::TerminalConsole;

/// Register - collect a username, age and password
#[derive(Parser, Debug)]
#[command(name = "register", version, about, long_about = None)]
struct Cli {
    /// Give up on a field after this many rejected attempts (default: never)
    #[arg(long, value_name = "N")]
    max_attempts: Option<NonZeroU32>,

    /// Do not echo the password when reading from a terminal
    #[arg(long)]
    hide_password: bool,

    /// Output the summary as JSON
    #[arg(long)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Session settings come from flags only
fn session_config(cli: &Cli) -> SessionConfig {
    SessionConfig::default()
        .with_max_attempts(cli.max_attempts)
        .with_hide_password(cli.hide_password)
}

fn run(cli: Cli) -> Result<()> {
    let config = session_config(&cli);
    tracing::debug!(?config, "starting registration session");

    let logger = LoggingService::new(EntryPoint::Cli, env!("CARGO_PKG_VERSION"));
    let console = TerminalConsole::new(config.hide_password);
    let mut session = RegistrationSession::new(console)
        .with_config(config)
        .with_logger(logger);

    let registration = session.run().context("Registration failed")?;
    output::summary(&registration, cli.json)
}
