use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;
use teloxide::types::ChatId;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::messenger::Messenger;
use crate::config::AlertConfig;
use crate::error::BotError;
use crate::utils::logging::{log_poll_error, log_system_event};

/// Where the notifier reads the watched page from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<String, BotError>;
}

pub struct HttpStatusSource {
    client: Client,
    url: Url,
}

impl HttpStatusSource {
    /// Requests time out after `timeout` so a slow page never stacks polls.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, BotError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String, BotError> {
        let response = self.client.get(self.url.clone()).send().await?;
        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Marker found and the alert was sent.
    Alerted,
    /// Marker not present.
    Quiet,
}

/// One poll: fetch, look for the marker, alert if it is there.
pub struct AlertNotifier {
    source: Arc<dyn StatusSource>,
    messenger: Arc<dyn Messenger>,
    chat_id: ChatId,
    marker: String,
    message: String,
}

impl AlertNotifier {
    pub fn new(
        source: Arc<dyn StatusSource>,
        messenger: Arc<dyn Messenger>,
        chat_id: ChatId,
        marker: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            messenger,
            chat_id,
            marker: marker.into(),
            message: message.into(),
        }
    }

    /// Alerts every time the marker is seen; repeated sightings are not
    /// collapsed.
    pub async fn poll_once(&self) -> Result<PollOutcome, BotError> {
        let body = self.source.fetch().await?;
        if !body.contains(&self.marker) {
            return Ok(PollOutcome::Quiet);
        }

        self.messenger.send_text(self.chat_id, &self.message).await?;
        Ok(PollOutcome::Alerted)
    }

    /// Polls and logs; never fails so the schedule keeps running.
    pub async fn tick(&self) -> Option<PollOutcome> {
        match self.poll_once().await {
            Ok(outcome) => {
                if outcome == PollOutcome::Alerted {
                    tracing::info!("Marker '{}' seen, alert sent to chat {}", self.marker, self.chat_id.0);
                }
                Some(outcome)
            }
            Err(e) => {
                log_poll_error(&self.source.describe(), &e.to_string());
                None
            }
        }
    }
}

/// Runs an [`AlertNotifier`] on a fixed interval until stopped.
pub struct NotifierService {
    notifier: Arc<AlertNotifier>,
    interval: Duration,
    scheduler: JobScheduler,
}

impl NotifierService {
    pub async fn new(
        notifier: Arc<AlertNotifier>,
        interval: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            notifier,
            interval,
            scheduler,
        })
    }

    /// Wires the HTTP source and the bot together from configuration.
    pub async fn from_config(
        config: &AlertConfig,
        messenger: Arc<dyn Messenger>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let source = HttpStatusSource::new(config.url.clone(), config.interval)?;
        let notifier = AlertNotifier::new(
            Arc::new(source),
            messenger,
            config.chat_id,
            config.marker.clone(),
            config.message.clone(),
        );
        Self::new(Arc::new(notifier), config.interval).await
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let notifier = self.notifier.clone();

        let poll_job = Job::new_repeated_async(self.interval, move |_uuid, _l| {
            let notifier = notifier.clone();
            Box::pin(async move {
                notifier.tick().await;
            })
        })?;

        self.scheduler.add(poll_job).await?;
        self.scheduler.start().await?;

        log_system_event(
            "Notifier started",
            Some(&format!("polling every {}s", self.interval.as_secs())),
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        log_system_event("Notifier stopped", None);
        Ok(())
    }

    /// One poll outside the schedule.
    pub async fn poll_now(&self) -> Option<PollOutcome> {
        self.notifier.tick().await
    }
}
