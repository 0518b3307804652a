//! Alert bot: polls a page on a fixed interval and messages one chat every
//! time the marker text is present.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use classroom_bots::config::AlertConfig;
use classroom_bots::services::notifier::NotifierService;
use classroom_bots::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AlertConfig::from_env()?;

    info!("Starting Alert Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Watching {} for '{}' every {}s, alerting chat {}",
        config.url,
        config.marker,
        config.interval.as_secs(),
        config.chat_id.0
    );

    let bot = Bot::new(&config.telegram_bot_token);
    let mut notifier = NotifierService::from_config(&config, Arc::new(bot))
        .await
        .map_err(|e| anyhow!("Failed to create notifier: {}", e))?;

    notifier
        .start()
        .await
        .map_err(|e| anyhow!("Failed to start notifier: {}", e))?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");

    if let Err(e) = notifier.stop().await {
        tracing::warn!("Error stopping notifier: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
