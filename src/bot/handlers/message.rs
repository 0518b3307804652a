use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::{AttendanceDialogue, AttendanceState, HandlerResult};
use crate::bot::commands::{attendance, AttendanceCommand};
use crate::bot::messenger::Messenger;
use crate::error::{BotError, ErrorKind};
use crate::store::AttendanceStore;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_validation_error,
};
use crate::utils::validation::validate_class_choice;

pub const NOTHING_TO_CANCEL_TEXT: &str = "No attendance session setup in progress.";

/// Who sent a message: logging fields plus the identity the attendance
/// commands need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub user_id: u64,
    pub chat_id: ChatId,
    pub identity: Option<attendance::StudentIdentity>,
}

impl Sender {
    pub fn new(chat_id: ChatId, user_id: u64, identity: Option<attendance::StudentIdentity>) -> Self {
        let name = identity
            .as_ref()
            .and_then(|i| i.username.clone())
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            name,
            user_id,
            chat_id,
            identity,
        }
    }

    pub fn of(msg: &Message) -> Self {
        let user = msg.from();
        Self::new(
            msg.chat.id,
            user.map(|u| u.id.0).unwrap_or(0),
            user.map(attendance::StudentIdentity::from_user),
        )
    }

    fn username(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|i| i.username.as_deref())
    }

    /// Logs the outcome and reports failures back to the chat.
    async fn finish(
        &self,
        messenger: &dyn Messenger,
        command: &str,
        value: &str,
        result: Result<(), BotError>,
    ) {
        let Err(error) = result else {
            log_command_success(command, &self.name, self.user_id, self.chat_id.0, None);
            return;
        };

        match error.kind() {
            ErrorKind::Validation | ErrorKind::LookupMiss => log_validation_error(
                command,
                value,
                &error.to_string(),
                &self.name,
                self.user_id,
                self.chat_id.0,
            ),
            ErrorKind::Transient => log_command_error(
                command,
                &self.name,
                self.user_id,
                self.chat_id.0,
                &error.to_string(),
            ),
        }

        if let Err(e) = CommandFeedback::new(messenger, self.chat_id).report(&error).await {
            tracing::error!("Failed to report error to chat {}: {}", self.chat_id.0, e);
        }
    }
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: AttendanceCommand,
    dialogue: AttendanceDialogue,
    store: Arc<AttendanceStore>,
) -> HandlerResult {
    handle_command(&bot, &store, &dialogue, &Sender::of(&msg), cmd).await
}

/// Free text while the teacher is picking a class.
pub async fn class_choice_handler(
    bot: Bot,
    msg: Message,
    dialogue: AttendanceDialogue,
    store: Arc<AttendanceStore>,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    handle_class_choice(&bot, &store, &dialogue, &Sender::of(&msg), text).await
}

pub async fn handle_command(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    dialogue: &AttendanceDialogue,
    sender: &Sender,
    cmd: AttendanceCommand,
) -> HandlerResult {
    let chat_id = sender.chat_id;
    let command = format!("{cmd:?}");
    log_command_start(&command, &sender.name, sender.user_id, chat_id.0, None);

    let result = match cmd {
        AttendanceCommand::Help => messenger
            .send_text(chat_id, &AttendanceCommand::descriptions().to_string())
            .await
            .map(|_| ()),
        AttendanceCommand::Start | AttendanceCommand::Register => {
            attendance::register(messenger, store, chat_id, sender.username())
                .await
                .map(|replaced| {
                    if replaced {
                        tracing::debug!("Refreshed chat id for @{}", sender.name);
                    }
                })
        }
        AttendanceCommand::StartAttendance => {
            let result = attendance::prompt_class_choice(messenger, store, chat_id).await;
            if result.is_ok() {
                dialogue.update(AttendanceState::AwaitingClassChoice).await?;
            }
            result
        }
        AttendanceCommand::MarkAttendance => match &sender.identity {
            Some(student) => attendance::mark_attendance(messenger, store, chat_id, student)
                .await
                .map(|session| {
                    tracing::debug!("Session now has {} marks", session.marks().len());
                }),
            None => Err(BotError::MissingUsername),
        },
        AttendanceCommand::Cancel => match dialogue.get_or_default().await? {
            AttendanceState::AwaitingClassChoice => {
                dialogue.exit().await?;
                attendance::cancel(messenger, chat_id).await
            }
            AttendanceState::Idle => CommandFeedback::new(messenger, chat_id)
                .info(NOTHING_TO_CANCEL_TEXT)
                .await
                .map(|_| ()),
        },
    };

    sender.finish(messenger, &command, "", result).await;
    Ok(())
}

pub async fn handle_class_choice(
    messenger: &dyn Messenger,
    store: &AttendanceStore,
    dialogue: &AttendanceDialogue,
    sender: &Sender,
    text: &str,
) -> HandlerResult {
    let chat_id = sender.chat_id;

    let class = match validate_class_choice(store.roster(), text) {
        Ok(class) => class,
        Err(error) => {
            // Stay in the dialogue so the teacher can pick again
            sender.finish(messenger, "ClassChoice", text, Err(error)).await;
            if let Err(e) = attendance::prompt_class_choice(messenger, store, chat_id).await {
                tracing::warn!("Failed to re-send class keyboard to chat {}: {}", chat_id.0, e);
            }
            return Ok(());
        }
    };

    log_command_start("ClassChoice", &sender.name, sender.user_id, chat_id.0, Some(&class));
    let result = match attendance::open_session(messenger, store, chat_id, &class).await {
        Ok(report) => {
            tracing::info!(
                "Attendance session for {} opened: {} prompted, {} unreachable",
                class,
                report.delivered.len(),
                report.failed.len()
            );
            match report.failure_summary() {
                Some(summary) => CommandFeedback::new(messenger, chat_id)
                    .warning(&summary)
                    .await
                    .map(|_| ()),
                None => Ok(()),
            }
        }
        Err(error) => Err(error),
    };

    dialogue.exit().await?;
    sender.finish(messenger, "ClassChoice", &class, result).await;
    Ok(())
}
