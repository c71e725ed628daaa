// Reserva - a restaurant reservation desk for the terminal
//
// Architecture:
// - booking: pure reservation logic (fields, validation, workflow)
// - tui (ratatui): the form, confirmation card, logs view, help
// - config: TOML file with env var overrides
// - logging: tracing into an in-app buffer, optional rolling JSON files

mod booking;
mod cli;
mod config;
mod logging;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing: the TUI buffer layer always runs (logs would
/// garble the alternate screen), plus rolling JSON files when enabled.
/// The returned guard must stay alive for the program's lifetime so
/// buffered file logs flush.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("reserva={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()));

    if !config.logging.file_enabled {
        registry.init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.logging.file_dir, e
        );
        // Fall back to buffer-only logging
        registry.init();
        return None;
    }

    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Daily => tracing_appender::rolling::daily(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Never => tracing_appender::rolling::never(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
    };

    // Non-blocking writer; JSON format for structured parsing
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    registry
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // CLI subcommands (config --show etc.) run and exit before the TUI
    let cli_args = cli::Cli::parse();
    if cli::handle_command(&cli_args) {
        return Ok(());
    }

    // Write the config template on first run so options are discoverable
    Config::ensure_config_exists();

    let config = Config::from_env();
    let log_buffer = LogBuffer::new();

    let _file_guard = init_tracing(&config, &log_buffer);

    tracing::info!(
        restaurant = %config.restaurant.name,
        theme = %config.theme,
        demo = config.demo_mode,
        "starting reservation desk"
    );

    if let Err(e) = tui::run_tui(log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("shutdown complete");
    Ok(())
}
