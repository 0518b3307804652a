use teloxide::types::{ChatId, MessageId};

use crate::bot::messenger::Messenger;
use crate::error::{BotError, ErrorKind};

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    pub fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), message)
}

/// Hint appended to error replies, if there is something the user can do.
pub fn suggestion_for(error: &BotError) -> Option<&'static str> {
    match error {
        BotError::InvalidInput(_) => Some("Usage: /quadratic <a> <b> <c>, e.g. /quadratic 1 -3 2"),
        BotError::UnknownClass(_) | BotError::EmptyClassChoice => {
            Some("Pick one of the classes on the keyboard, or /cancel.")
        }
        BotError::MissingUsername => Some("Set a username in Telegram settings, then send /start."),
        BotError::UnregisteredStudent(_) => Some("Ask your teacher to add you to the class roster."),
        BotError::NoActiveSession(_) => Some("Wait for your teacher to start the session."),
        BotError::MissingChatIdentity(_) => Some("The student must send /start to the bot first."),
        BotError::Transport(_) | BotError::Upstream(_) => None,
    }
}

/// Renders a [`BotError`] as a user-facing reply.
pub fn describe_error(error: &BotError) -> String {
    let feedback_type = match error.kind() {
        ErrorKind::Validation | ErrorKind::LookupMiss => FeedbackType::Warning,
        ErrorKind::Transient => FeedbackType::Error,
    };
    match suggestion_for(error) {
        Some(suggestion) => format!(
            "{}\n\n💡 Suggestion: {}",
            format_feedback(feedback_type, &error.to_string()),
            suggestion
        ),
        None => format_feedback(feedback_type, &error.to_string()),
    }
}

/// Centralized feedback for one chat
pub struct CommandFeedback<'a> {
    messenger: &'a dyn Messenger,
    chat_id: ChatId,
}

impl<'a> CommandFeedback<'a> {
    pub fn new(messenger: &'a dyn Messenger, chat_id: ChatId) -> Self {
        Self { messenger, chat_id }
    }

    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> Result<MessageId, BotError> {
        self.messenger
            .send_text(self.chat_id, &format_feedback(feedback_type, message))
            .await
    }

    pub async fn warning(&self, message: &str) -> Result<MessageId, BotError> {
        self.send(FeedbackType::Warning, message).await
    }

    pub async fn info(&self, message: &str) -> Result<MessageId, BotError> {
        self.send(FeedbackType::Info, message).await
    }

    /// Reports a failed command to the sender
    pub async fn report(&self, error: &BotError) -> Result<MessageId, BotError> {
        self.messenger.send_text(self.chat_id, &describe_error(error)).await
    }
}
