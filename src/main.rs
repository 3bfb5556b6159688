//! Clutch - turn a web page into a ready-to-use content angle.
//!
//! Main entry point for the Clutch CLI.

mod cli;
mod cmd_analyze;
mod cmd_config;
mod logging;
mod register;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use clutch_config::{Config, ConfigError, ConfigLoader, ConfigValidator};
use clutch_protocols::{ClassifiedError, ErrorKind};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            match err.downcast_ref::<ClassifiedError>() {
                Some(classified) => {
                    error!(kind = %classified.kind, "{}", classified.message);
                    eprintln!("{}", classified.user_message());
                }
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    logging::init_tracing(&config.logging, !cli.no_file_log)?;

    let api_key = cli.api_key.as_deref();
    match cli.command {
        Commands::Analyze(args) => cmd_analyze::handle_analyze(args, api_key, &config).await,
        Commands::CheckKey => cmd_analyze::handle_check_key(api_key, &config).await,
        Commands::Config { check } => cmd_config::handle_config(&config, check),
    }
}

/// Load the config file (or defaults) and refuse invalid settings.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };

    // `config --check` reports problems itself.
    if !matches!(cli.command, Commands::Config { check: true }) {
        if let Some(first) = ConfigValidator::validate(&config).errors.into_iter().next() {
            return Err(ConfigError::InvalidValue {
                field: first.path,
                message: first.message,
            }
            .into());
        }
    }

    Ok(config)
}

/// 2 for credential problems, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ClassifiedError>().map(|e| e.kind) {
        Some(ErrorKind::InvalidCredential) => 2,
        _ => 1,
    }
}
