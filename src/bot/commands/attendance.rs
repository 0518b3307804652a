use teloxide::types::{ChatId, User};

use crate::bot::messenger::Messenger;
use crate::error::BotError;
use crate::store::{session_header, AttendanceSession, AttendanceStore};
use crate::utils::logging::log_broadcast_failure;

pub const WELCOME_TEXT: &str = "Welcome! Your username has been stored in our very secure servers.";
pub const CHOOSE_CLASS_TEXT: &str = "Choose class:";
pub const SENDING_TEXT: &str = "Sending attendance messages...";
pub const MARK_PROMPT: &str = "Mark attendance!";
pub const MARKED_TEXT: &str = "Attendance marked!";
pub const CANCELED_TEXT: &str = "Attendance session creation has been canceled.";

/// The parts of a Telegram user the attendance flow cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl StudentIdentity {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    /// "{first} {last}", or just the first name when there is no last name.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastFailure {
    pub username: String,
    pub error: BotError,
}

/// Outcome of prompting every student of a class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub class: String,
    pub delivered: Vec<String>,
    pub failed: Vec<BroadcastFailure>,
}

impl BroadcastReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Text for the teacher listing who could not be reached.
    pub fn failure_summary(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        let mut text = format!(
            "Could not reach {} of {} students in {}:",
            self.failed.len(),
            self.failed.len() + self.delivered.len(),
            self.class
        );
        for failure in &self.failed {
            text.push_str(&format!("\n• {}", failure.error));
        }
        Some(text)
    }
}

/// Caches `username -> chat_id` and welcomes the user.
/// Returns `true` when an earlier registration was replaced.
pub async fn register(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    chat_id: ChatId,
    username: Option<&str>,
) -> Result<bool, BotError> {
    let username = username.ok_or(BotError::MissingUsername)?;
    let replaced = store.register(username, chat_id).await;
    messenger.send_text(chat_id, WELCOME_TEXT).await?;
    Ok(replaced)
}

/// First step of the flow: offer every known class as a keyboard button.
pub async fn prompt_class_choice(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    chat_id: ChatId,
) -> Result<(), BotError> {
    let classes = store.roster().class_names();
    messenger.send_choice(chat_id, CHOOSE_CLASS_TEXT, &classes).await?;
    Ok(())
}

/// Second step of the flow: post the session message, store the session and
/// prompt every student of `class`.
pub async fn open_session(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    chat_id: ChatId,
    class: &str,
) -> Result<BroadcastReport, BotError> {
    if !store.roster().contains_class(class) {
        return Err(BotError::UnknownClass(class.to_string()));
    }

    let message_id = messenger.send_text(chat_id, &session_header(class)).await?;
    let session = AttendanceSession::new(class, chat_id, message_id);
    if store.open_session(class, session).await?.is_some() {
        tracing::info!("Replaced the previous attendance session for {}", class);
    }

    if let Err(e) = messenger.send_text(chat_id, SENDING_TEXT).await {
        tracing::warn!("Failed to send progress note to chat {}: {}", chat_id.0, e);
    }

    Ok(broadcast_prompt(messenger, store, class).await)
}

async fn broadcast_prompt(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    class: &str,
) -> BroadcastReport {
    let mut report = BroadcastReport {
        class: class.to_string(),
        ..Default::default()
    };

    for username in store.roster().usernames(class).unwrap_or_default() {
        let result = match store.chat_id_for(&username).await {
            Some(student_chat) => messenger.send_text(student_chat, MARK_PROMPT).await.map(|_| ()),
            None => Err(BotError::MissingChatIdentity(username.clone())),
        };

        match result {
            Ok(()) => report.delivered.push(username),
            Err(error) => {
                log_broadcast_failure(class, &username, &error.to_string());
                report.failed.push(BroadcastFailure { username, error });
            }
        }
    }

    report
}

/// Appends the student to their class's session, re-renders the session
/// message and confirms privately. The mark is committed before the edit, so
/// a failed edit is logged and the student is still confirmed.
pub async fn mark_attendance(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    chat_id: ChatId,
    student: &StudentIdentity,
) -> Result<AttendanceSession, BotError> {
    let username = student.username.as_deref().ok_or(BotError::MissingUsername)?;
    let session = store.append_mark(username, &student.display_name()).await?;

    if let Err(e) = messenger
        .edit_text(session.chat_id, session.message_id, session.text())
        .await
    {
        tracing::warn!(
            "Mark for @{} recorded but session message in chat {} was not updated: {}",
            username,
            session.chat_id.0,
            e
        );
    }
    messenger.send_text(chat_id, MARKED_TEXT).await?;

    Ok(session)
}

pub async fn cancel(messenger: &dyn Messenger, chat_id: ChatId) -> Result<(), BotError> {
    messenger.send_text(chat_id, CANCELED_TEXT).await?;
    Ok(())
}
