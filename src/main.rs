//! framescope - extract frame cards from HTML meta declarations.

mod cli;
mod cmd_extract;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use framescope_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use cli::{Cli, Commands};
use cmd_extract::Outcome;

/// Initialize tracing on stderr, plus a daily rolling file when
/// `logging.directory` is set.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match logging.directory {
        Some(ref log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("framescope")
                .filename_suffix("log")
                .max_log_files(30)
                .build(log_dir)
                .context("Failed to create log file appender")?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes on drop, so it must outlive main.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        // stdout carries command output only
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = ConfigLoader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let warnings = ConfigValidator::validate(&config)
        .into_result()
        .context("Invalid configuration")?;
    init_tracing(&config.logging)?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = load_config(&cli)?;
    debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Extract {
            input,
            url,
            format,
            compact,
        } => cmd_extract::handle_extract(
            &config,
            input.as_deref(),
            url,
            format.map(Into::into),
            compact,
        ),
        Commands::Check { input, url } => cmd_extract::handle_check(&config, input.as_deref(), url),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Frame) => ExitCode::SUCCESS,
        Ok(Outcome::NotAFrame) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
