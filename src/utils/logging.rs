use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classroom_bots=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

pub fn log_command_success(command: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Transport and upstream failures; validation problems go through
/// [`log_validation_error`].
pub fn log_command_error(command: &str, user: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Bad input or a lookup miss, logged at warn.
pub fn log_validation_error(command: &str, value: &str, error: &str, user: &str, user_id: u64, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - '{}' rejected: {} - user {}({}) in chat {}",
        command, value, error, user, user_id, chat_id
    );
}

/// Logs one recipient of a broadcast that could not be reached
pub fn log_broadcast_failure(class: &str, username: &str, error: &str) {
    warn!("BROADCAST_FAILURE: {} -> @{} failed: {}", class, username, error);
}

/// Logs a failed poll iteration
pub fn log_poll_error(url: &str, error: &str) {
    warn!("POLL_ERROR: {} - {}", url, error);
}

/// Startup, shutdown and scheduler events.
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
