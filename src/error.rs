use thiserror::Error;

/// Coarse classification of a [`BotError`], used to pick the reply tone and
/// log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The sender supplied malformed input.
    Validation,
    /// Something the request depends on is not known (yet).
    LookupMiss,
    /// The transport or upstream HTTP endpoint failed; the next cycle may succeed.
    Transient,
}

/// Every recoverable failure a handler or the notifier can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    #[error("Class name cannot be empty")]
    EmptyClassChoice,

    #[error("You need a Telegram username to use this bot")]
    MissingUsername,

    #[error("@{0} is not on any class roster")]
    UnregisteredStudent(String),

    #[error("No attendance session in progress for {0}")]
    NoActiveSession(String),

    #[error("@{0} has not started a chat with the bot yet")]
    MissingChatIdentity(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::InvalidInput(_) | BotError::UnknownClass(_) | BotError::EmptyClassChoice => {
                ErrorKind::Validation
            }
            BotError::MissingUsername
            | BotError::UnregisteredStudent(_)
            | BotError::NoActiveSession(_)
            | BotError::MissingChatIdentity(_) => ErrorKind::LookupMiss,
            BotError::Transport(_) | BotError::Upstream(_) => ErrorKind::Transient,
        }
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(e: teloxide::RequestError) -> Self {
        BotError::Transport(e.to_string())
    }
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        BotError::Upstream(e.to_string())
    }
}
