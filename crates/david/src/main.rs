//! DAVID - Entry Point
//!
//! Loads the configuration, starts logging and the diagnostic trace, builds
//! the process context and runs until interrupted.

// Force-link david-providers to ensure linkme registrations are included
extern crate david_providers;

use anyhow::Context;
use clap::Parser;
use david_infrastructure::config::ConfigLoader;
use david_infrastructure::logging::init_logging;

/// Command line interface for the DAVID host
#[derive(Parser, Debug)]
#[command(name = "david")]
#[command(about = "DAVID host runtime")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Base directory for modules and trace files
    #[arg(long)]
    pub base_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;
    if let Some(base_dir) = cli.base_dir {
        config.runtime.base_dir = Some(base_dir);
    }

    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let context = david::start(config).context("Failed to start the host")?;
    tracing::info!(
        socket_server = context.socket_server().server_name(),
        base_dir = %context.config().base_dir().display(),
        "DAVID host started"
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutting down");
    david::stop().context("Failed to shut down the host")?;
    Ok(())
}
