use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasktime_cli::commands::{events, finish, last_duration, start};
use tasktime_cli::{Cli, Commands, Config};
use tasktime_core::SystemClock;

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<tasktime_db::Database> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create database directory {}", parent.display())
        })?;
    }

    tasktime_db::Database::open(&config.database_path).context("failed to open database")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let outcome = match &cli.command {
        Some(Commands::Start { task }) => {
            let db = open_database(cli.config.as_deref())?;
            start::run(&db, SystemClock, task)?
        }
        Some(Commands::Finish { task }) => {
            let db = open_database(cli.config.as_deref())?;
            finish::run(&db, SystemClock, task)?
        }
        Some(Commands::LastDuration { task }) => {
            let db = open_database(cli.config.as_deref())?;
            last_duration::run(&db, task)?
        }
        Some(Commands::Events { json }) => {
            let db = open_database(cli.config.as_deref())?;
            events::run(&mut std::io::stdout().lock(), &db, *json)?;
            return Ok(ExitCode::SUCCESS);
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(outcome.emit()?)
}
