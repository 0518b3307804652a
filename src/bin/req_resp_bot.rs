//! Request/response bot: /start, /help, /quadratic, /cat, and echo for
//! everything else.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;

use classroom_bots::bot::handlers::UtilityHandler;
use classroom_bots::config::required_token;
use classroom_bots::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let token = required_token()?;

    info!("Starting Request/Response Bot v{}", env!("CARGO_PKG_VERSION"));
    let bot = Bot::new(token);

    Dispatcher::builder(bot, UtilityHandler::schema())
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Application stopped");
    Ok(())
}
