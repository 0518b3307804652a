//! # Attendance Bot Main Entry Point
//!
//! Loads configuration and the class roster, starts the health endpoint and
//! runs the Telegram dispatcher until Ctrl-C.

use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;

use classroom_bots::bot::handlers::{AttendanceHandler, AttendanceState};
use classroom_bots::config::Config;
use classroom_bots::services::health::HealthService;
use classroom_bots::store::AttendanceStore;
use classroom_bots::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Attendance Bot v{}", env!("CARGO_PKG_VERSION"));

    let roster = config.load_roster()?;
    info!(
        "Roster loaded - {} classes: {}",
        roster.class_count(),
        roster.class_names().join(", ")
    );
    let store = Arc::new(AttendanceStore::new(roster));

    let bot = Bot::new(&config.telegram_bot_token);
    let handler = AttendanceHandler::new(store.clone());

    let health_service = HealthService::new(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![InMemStorage::<AttendanceState>::new()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Either task finishing means shutdown
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
