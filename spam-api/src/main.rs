//! spam-api - HTTP spam scoring service
//!
//! Usage: `spam-api [CONFIG_FILE]` (or set `SPAM_API_CONFIG`)

use anyhow::Context;
use spam_api::{ApiConfig, ApiServer, AppState};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the config file
const CONFIG_ENV: &str = "SPAM_API_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);

    let config = ApiConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config.logging.level, &config.logging.format);

    info!("Starting spam-api v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config_path {
        info!("Loaded configuration from {}", path.display());
    }

    let state = AppState::from_config(&config).context("Failed to initialize model")?;
    let server = ApiServer::new(state, config.server.listen_addr.clone());

    server.run().await?;

    Ok(())
}

fn init_tracing(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    let (pretty, json) = match format {
        "json" => (None, Some(tracing_subscriber::fmt::layer().json())),
        _ => (Some(tracing_subscriber::fmt::layer()), None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
