pub mod general_message;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        UpdateHandler,
    },
    prelude::*,
};

use crate::bot::commands::{AttendanceCommand, UtilityCommand};
use crate::store::AttendanceStore;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;
pub type AttendanceDialogue = Dialogue<AttendanceState, InMemStorage<AttendanceState>>;

/// Per-chat position in the "start attendance" conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AttendanceState {
    #[default]
    Idle,
    AwaitingClassChoice,
}

pub struct AttendanceHandler {
    pub store: Arc<AttendanceStore>,
}

impl AttendanceHandler {
    pub fn new(store: Arc<AttendanceStore>) -> Self {
        Self { store }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let store = self.store.clone();
        let store_text = self.store.clone();

        dialogue::enter::<Update, InMemStorage<AttendanceState>, AttendanceState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<AttendanceCommand>()
                    .endpoint(
                        move |bot: Bot, msg: Message, cmd: AttendanceCommand, dialogue: AttendanceDialogue| {
                            let store = store.clone();
                            async move { message::command_handler(bot, msg, cmd, dialogue, store).await }
                        },
                    ),
            )
            .branch(
                Update::filter_message()
                    .branch(dptree::case![AttendanceState::AwaitingClassChoice].endpoint(
                        move |bot: Bot, msg: Message, dialogue: AttendanceDialogue| {
                            let store = store_text.clone();
                            async move { message::class_choice_handler(bot, msg, dialogue, store).await }
                        },
                    )),
            )
    }
}

/// Stateless request/response bot: utility commands, everything else echoed.
pub struct UtilityHandler;

impl UtilityHandler {
    pub fn schema() -> UpdateHandler<HandlerError> {
        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<UtilityCommand>()
                    .endpoint(general_message::utility_command_handler),
            )
            .branch(Message::filter_text().endpoint(general_message::echo_handler))
    }
}
