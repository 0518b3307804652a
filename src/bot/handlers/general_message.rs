use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::HandlerResult;
use crate::bot::commands::utility::{cat_photo_url, quadratic_reply, random_cat_id, START_TEXT};
use crate::bot::commands::UtilityCommand;
use crate::bot::messenger::Messenger;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_error, log_command_start, log_validation_error};

pub async fn utility_command_handler(bot: Bot, msg: Message, cmd: UtilityCommand) -> HandlerResult {
    let chat_id = msg.chat.id;
    let user = msg.from();
    let username = user.and_then(|u| u.username.as_deref()).unwrap_or("unknown");
    let user_id = user.map(|u| u.id.0).unwrap_or(0);
    log_command_start(&format!("{cmd:?}"), username, user_id, chat_id.0, None);

    match cmd {
        UtilityCommand::Start => {
            bot.send_text(chat_id, START_TEXT).await?;
        }
        UtilityCommand::Help => {
            bot.send_text(chat_id, &UtilityCommand::descriptions().to_string()).await?;
        }
        UtilityCommand::Quadratic { coefficients } => match quadratic_reply(&coefficients) {
            Ok(reply) => {
                bot.send_text(chat_id, &reply).await?;
            }
            Err(e) => {
                log_validation_error("quadratic", &coefficients, &e.to_string(), username, user_id, chat_id.0);
                CommandFeedback::new(&bot, chat_id).report(&e).await?;
            }
        },
        UtilityCommand::Cat => {
            let id = {
                let mut rng = rand::thread_rng();
                random_cat_id(&mut rng)
            };
            let url = cat_photo_url(id)?;
            if let Err(e) = Messenger::send_photo(&bot, chat_id, url).await {
                log_command_error("cat", username, user_id, chat_id.0, &e.to_string());
                CommandFeedback::new(&bot, chat_id).report(&e).await?;
            }
        }
    }

    Ok(())
}

/// Anything that is not a known command is sent straight back.
pub async fn echo_handler(bot: Bot, msg: Message, text: String) -> HandlerResult {
    bot.send_text(msg.chat.id, &text).await?;
    Ok(())
}
