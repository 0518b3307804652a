#![allow(dead_code, clippy::unwrap_used)]

use async_trait::async_trait;
use classroom_bots::bot::messenger::Messenger;
use classroom_bots::error::BotError;
use classroom_bots::services::notifier::StatusSource;
use reqwest::Url;
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use teloxide::types::{ChatId, MessageId};

/// Everything a handler asked the transport to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: ChatId, text: String },
    Choice { chat_id: ChatId, text: String, options: Vec<String> },
    Photo { chat_id: ChatId, url: String },
    Edit { chat_id: ChatId, message_id: MessageId, text: String },
}

/// Records outbound calls instead of talking to Telegram. Sends to chats in
/// `failing_chats` return a transport error.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    next_id: Mutex<i32>,
    failing_chats: Mutex<HashSet<ChatId>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_sends_to(&self, chat_id: ChatId) {
        self.failing_chats.lock().unwrap().insert(chat_id);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts_to(&self, chat_id: ChatId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id: c, text } if c == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Edit { .. }))
            .collect()
    }

    pub fn count_text(&self, needle: &str) -> usize {
        self.sent()
            .iter()
            .filter(|s| matches!(s, Sent::Text { text, .. } if text == needle))
            .count()
    }

    fn record(&self, chat_id: ChatId, entry: Sent) -> Result<MessageId, BotError> {
        if self.failing_chats.lock().unwrap().contains(&chat_id) {
            return Err(BotError::Transport(format!("chat {} unreachable", chat_id.0)));
        }
        self.sent.lock().unwrap().push(entry);
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(MessageId(*next_id))
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId, BotError> {
        self.record(chat_id, Sent::Text { chat_id, text: text.to_string() })
    }

    async fn send_choice(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[String],
    ) -> Result<MessageId, BotError> {
        self.record(
            chat_id,
            Sent::Choice { chat_id, text: text.to_string(), options: options.to_vec() },
        )
    }

    async fn send_photo(&self, chat_id: ChatId, url: Url) -> Result<MessageId, BotError> {
        self.record(chat_id, Sent::Photo { chat_id, url: url.to_string() })
    }

    async fn edit_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), BotError> {
        self.record(
            chat_id,
            Sent::Edit { chat_id, message_id, text: text.to_string() },
        )
        .map(|_| ())
    }
}

/// Serves queued responses in order, then repeats the last one.
pub struct CannedSource {
    responses: Mutex<VecDeque<Result<String, BotError>>>,
    last: Mutex<Option<Result<String, BotError>>>,
    pub fetches: Mutex<usize>,
}

impl CannedSource {
    pub fn new(responses: Vec<Result<String, BotError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            fetches: Mutex::new(0),
        }
    }

    pub fn always(body: &str) -> Self {
        Self::new(vec![Ok(body.to_string())])
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl StatusSource for CannedSource {
    fn describe(&self) -> String {
        "canned://status".to_string()
    }

    async fn fetch(&self) -> Result<String, BotError> {
        *self.fetches.lock().unwrap() += 1;
        let next = self.responses.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(response) = next {
            *last = Some(response);
        }
        last.clone()
            .unwrap_or_else(|| Err(BotError::Upstream("no canned response".to_string())))
    }
}
