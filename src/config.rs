use anyhow::{anyhow, Result};
use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use teloxide::types::ChatId;

use crate::store::ClassRoster;

/// `TELEGRAM_BOT_TOKEN`, for binaries that need nothing else.
pub fn required_token() -> Result<String> {
    let token = env::var("TELEGRAM_BOT_TOKEN")
        .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

    if token.trim().is_empty() {
        return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
    }

    Ok(token)
}

/// Unset and blank both mean "use the default".
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub roster_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = required_token()?;

        let port_str = optional_var("HTTP_PORT").unwrap_or_else(|| "3000".to_string());
        let http_port = port_str
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let roster_path = optional_var("ROSTER_PATH").map(PathBuf::from);

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            roster_path,
        })
    }

    /// The roster file if one is configured, the built-in roster otherwise.
    pub fn load_roster(&self) -> Result<ClassRoster> {
        match &self.roster_path {
            Some(path) => ClassRoster::from_path(path),
            None => Ok(ClassRoster::builtin()),
        }
    }
}

/// Settings for the page-watching alert bot.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    pub telegram_bot_token: String,
    pub url: Url,
    pub chat_id: ChatId,
    pub marker: String,
    pub message: String,
    pub interval: Duration,
}

impl AlertConfig {
    pub fn from_env() -> Result<Self> {
        let token = required_token()?;

        let url = optional_var("ALERT_URL").ok_or_else(|| anyhow!("ALERT_URL must be set"))?;
        let url = Url::parse(&url).map_err(|e| anyhow!("Invalid ALERT_URL: {}", e))?;

        let chat_id = optional_var("ALERT_CHAT_ID")
            .ok_or_else(|| anyhow!("ALERT_CHAT_ID must be set"))?
            .parse::<i64>()
            .map_err(|_| anyhow!("Invalid ALERT_CHAT_ID"))?;

        let marker = optional_var("ALERT_MARKER").unwrap_or_else(|| "Blue".to_string());
        let message = optional_var("ALERT_MESSAGE").unwrap_or_else(|| "It's blue!".to_string());

        let interval_secs: u64 = optional_var("ALERT_INTERVAL_SECS")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .map_err(|_| anyhow!("Invalid ALERT_INTERVAL_SECS"))?;
        if interval_secs == 0 {
            return Err(anyhow!("ALERT_INTERVAL_SECS must be at least 1"));
        }

        Ok(AlertConfig {
            telegram_bot_token: token,
            url,
            chat_id: ChatId(chat_id),
            marker,
            message,
            interval: Duration::from_secs(interval_secs),
        })
    }
}
