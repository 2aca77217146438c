//! Turn an incoming chat message into a reply.

use tracing::{info, warn};

use super::command::{
    command_help, mentions_bot, parse_command, CommandParseError, TelegramCommand,
};
use super::format::{format_error, format_report};
use crate::application::calculator::EvCalculator;

/// A reply ready to be sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Send with `MarkdownV2` parse mode.
    pub markdown: bool,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    fn markdown(text: String) -> Self {
        Self {
            text,
            markdown: true,
        }
    }
}

/// Where a message came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatContext<'a> {
    /// This bot's username, without the leading `@`.
    pub bot_username: Option<&'a str>,
    /// One-to-one chat with the bot.
    pub private: bool,
}

/// Process a message and return the reply, if any.
///
/// Returns `None` for messages that are not commands, for commands
/// addressed to another bot, and for unknown commands in a group unless
/// they mention this bot. Every other error, from command parsing or from
/// the calculation, becomes a plain-text reply so the bot never stops on
/// bad input.
#[must_use]
pub fn reply_for_message(
    text: &str,
    calculator: &EvCalculator,
    chat: ChatContext<'_>,
) -> Option<Reply> {
    let command = match parse_command(text, chat.bot_username) {
        Ok(command) => command,
        Err(CommandParseError::NotACommand) => return None,
        Err(CommandParseError::UnknownCommand(_))
            if !chat.private && !mentions_bot(text, chat.bot_username) =>
        {
            return None;
        }
        Err(err @ CommandParseError::UnknownCommand(_)) => {
            return Some(Reply::plain(format!(
                "Invalid command: {err}\n\n{}",
                command_help()
            )));
        }
        Err(err) => {
            warn!(error = %err, "Rejected malformed /ev command");
            return Some(Reply::plain(format_error(err)));
        }
    };

    match command {
        TelegramCommand::Start | TelegramCommand::Help => Some(Reply::plain(command_help())),
        TelegramCommand::Ev(request) => match calculator.evaluate(request) {
            Ok(report) => Some(Reply::markdown(format_report(&report))),
            Err(err) => {
                info!(error = %err, "EV calculation failed");
                Some(Reply::plain(format_error(err)))
            }
        },
    }
}
