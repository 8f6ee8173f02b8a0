mod app;

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use anyhow::Result;
use raidkit_core::{
    config::{self, AppConfig},
    store::DataStore,
};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    let data = DataStore::new(config.data_path());

    let mut app = app::RaidkitApp::new(data);
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("raidkit");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("raidkit.log");

    let env_filter = EnvFilter::from_default_env();

    // File only: stdout would bleed into the alternate screen.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
