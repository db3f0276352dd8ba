use anyhow::{Context, Result};
use clap::Parser;
use person_manager::{AppConfig, Cli, HttpPersonApi, Session, cli::App};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()
        .and_then(|config| config.with_cli(cli))
        .context("failed to load configuration")?;

    init_tracing(&config.log_file)?;

    let api = HttpPersonApi::with_options(&config.base_url, config.accept_invalid_certs)
        .context("failed to build the Persons API client")?;
    info!(base_url = %api.base_url(), page_size = config.page_size, "person-manager started");

    let mut app = App::new(Session::new(api, config.page_size));
    app.run().await.context("terminal error")?;

    info!("person-manager stopped");
    Ok(())
}

/// The terminal belongs to the UI, so log output goes to a file.
fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("person_manager=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
