//! attrcast agent
//!
//! Periodically collects a guest inventory snapshot and publishes it
//! field-by-field to the configured attribute store.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use attrcast_exec::local::LocalRunner;
use attrcast_exec::traits::CommandRunner;
use attrcast_report::run_report;
use attrcast_store::HttpStore;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "attrcast")]
#[command(about = "Guest inventory attribute reporter", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single report cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.agent.log_level)),
        )
        .init();

    info!(
        endpoint = %config.store.endpoint,
        base_path = %config.store.base_path,
        "attrcast agent starting"
    );

    let runner: Arc<dyn CommandRunner> = Arc::new(LocalRunner::new());
    let store = HttpStore::new(&config.store.endpoint)?;

    if cli.once {
        report_once(&runner, &store, &config.store.base_path).await;
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(config.report.interval_secs));
    loop {
        ticker.tick().await;
        report_once(&runner, &store, &config.store.base_path).await;
    }
}

async fn report_once(runner: &Arc<dyn CommandRunner>, store: &HttpStore, base_path: &str) {
    let inventory = run_report(Arc::clone(runner), store, base_path).await;

    if inventory.errors.is_empty() {
        info!("report cycle completed");
    } else {
        warn!(
            errors = inventory.errors.len(),
            "report cycle completed with errors"
        );
    }
}
