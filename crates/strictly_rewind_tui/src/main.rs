//! Strictly Rewind - terminal tic-tac-toe with time-travel.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_rewind::SortOrder;
use strictly_rewind_tui::{Cli, TuiConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if cli.descending {
        config = config.with_initial_order(SortOrder::Descending);
    }
    info!(?config, "Configuration resolved");

    run_tui(config)
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
