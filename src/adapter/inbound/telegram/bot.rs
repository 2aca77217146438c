//! Telegram long-polling bot.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, Me, ParseMode};
use tracing::{error, info, warn};

use super::command::bot_commands;
use super::reply::{reply_for_message, ChatContext};
use crate::application::calculator::EvCalculator;
use crate::error::Result;

/// Runtime settings for the bot.
#[derive(Debug, Clone)]
pub struct TelegramBotConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Register commands with Telegram's "/" menu on startup.
    pub register_commands: bool,
}

/// Run the bot until the process receives Ctrl-C.
///
/// Each message is handled independently; calculation errors are sent back
/// to the chat and never end the loop.
///
/// # Errors
///
/// Returns an error if the bot identity cannot be fetched (bad token or no
/// network).
pub async fn run(config: TelegramBotConfig, calculator: EvCalculator) -> Result<()> {
    let bot = Bot::new(&config.bot_token);

    let me = bot.get_me().await?;
    info!(
        username = me.username(),
        bankroll = %calculator.bankroll(),
        "Telegram bot connected"
    );

    if config.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    teloxide::repl(bot, move |bot: Bot, msg: Message, me: Me| async move {
        let Some(text) = msg.text() else {
            return respond(());
        };
        let chat = ChatContext {
            bot_username: me.user.username.as_deref(),
            private: msg.chat.is_private(),
        };

        if let Some(reply) = reply_for_message(text, &calculator, chat) {
            let request = bot.send_message(msg.chat.id, reply.text);
            let sent = if reply.markdown {
                request.parse_mode(ParseMode::MarkdownV2).await
            } else {
                request.await
            };
            if let Err(e) = sent {
                error!(error = %e, chat_id = msg.chat.id.0, "Failed to send Telegram reply");
            }
        }

        respond(())
    })
    .await;

    info!("Telegram bot stopped");
    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
