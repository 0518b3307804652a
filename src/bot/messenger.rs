use async_trait::async_trait;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{InputFile, KeyboardButton, KeyboardMarkup, MessageId};

use crate::error::BotError;

/// The outbound half of the messaging transport.
///
/// Handlers only talk to Telegram through this trait so the flows can be
/// driven without a live bot.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends plain text and returns the id of the new message.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId, BotError>;

    /// Sends text with a one-time reply keyboard, one button per option.
    async fn send_choice(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[String],
    ) -> Result<MessageId, BotError>;

    async fn send_photo(&self, chat_id: ChatId, url: Url) -> Result<MessageId, BotError>;

    /// Replaces the text of a message sent earlier.
    async fn edit_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), BotError>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId, BotError> {
        let sent = self.send_message(chat_id, text).await?;
        Ok(sent.id)
    }

    async fn send_choice(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[String],
    ) -> Result<MessageId, BotError> {
        let row: Vec<KeyboardButton> = options.iter().map(KeyboardButton::new).collect();
        let keyboard = KeyboardMarkup::new(vec![row]).one_time_keyboard(true);

        let sent = self
            .send_message(chat_id, text)
            .reply_markup(keyboard)
            .await?;
        Ok(sent.id)
    }

    async fn send_photo(&self, chat_id: ChatId, url: Url) -> Result<MessageId, BotError> {
        let sent = Requester::send_photo(self, chat_id, InputFile::url(url)).await?;
        Ok(sent.id)
    }

    async fn edit_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), BotError> {
        self.edit_message_text(chat_id, message_id, text).await?;
        Ok(())
    }
}
