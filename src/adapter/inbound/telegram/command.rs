//! Telegram command parsing.

use crate::application::calculator::{parse_legs, EvRequest};
use crate::domain::OddsError;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Help,
    Ev(EvRequest),
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidInteger { name: &'static str, value: String },
    InvalidLegs(OddsError),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
            Self::InvalidInteger { name, value } => {
                write!(f, "`{value}` is not a whole number for `{name}`")
            }
            Self::InvalidLegs(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Split the leading `/command@bot` token into the command and the mention.
fn command_token(text: &str) -> Option<(&str, Option<&str>)> {
    let raw_command = text.split_whitespace().next()?;
    if !raw_command.starts_with('/') {
        return None;
    }
    Some(match raw_command.split_once('@') {
        Some((command, mention)) => (command, Some(mention)),
        None => (raw_command, None),
    })
}

fn is_own_username(mention: &str, bot_username: &str) -> bool {
    mention.eq_ignore_ascii_case(bot_username.trim_start_matches('@'))
}

/// True when the message is a command that mentions `bot_username`
/// explicitly (`/cmd@bot_username`).
#[must_use]
pub fn mentions_bot(text: &str, bot_username: Option<&str>) -> bool {
    match (command_token(text), bot_username) {
        (Some((_, Some(mention))), Some(me)) => is_own_username(mention, me),
        _ => false,
    }
}

/// Parse a Telegram message into a bot command.
///
/// `/ev` takes `<payout_odds> <fv_odds> [boost] [bet name...]`. The
/// fair-value odds are comma separated; spaces after the commas are allowed.
///
/// A command addressed to a different bot (`/ev@other_bot`) is
/// [`CommandParseError::NotACommand`]. Without a known `bot_username` every
/// mention is accepted.
pub fn parse_command(
    text: &str,
    bot_username: Option<&str>,
) -> Result<TelegramCommand, CommandParseError> {
    let Some((command, mention)) = command_token(text) else {
        return Err(CommandParseError::NotACommand);
    };
    if let (Some(mention), Some(me)) = (mention, bot_username) {
        if !is_own_username(mention, me) {
            return Err(CommandParseError::NotACommand);
        }
    }

    let mut parts = text.split_whitespace().skip(1).peekable();

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/ev" => {
            let raw_payout = parts
                .next()
                .ok_or(CommandParseError::MissingArgument("payout_odds"))?;
            let payout_odds = parse_integer("payout_odds", raw_payout)?;

            let mut raw_legs = parts
                .next()
                .ok_or(CommandParseError::MissingArgument("fv_odds"))?
                .to_string();
            while let Some(next) = parts.peek() {
                if !(raw_legs.ends_with(',') || next.starts_with(',')) {
                    break;
                }
                raw_legs.push_str(next);
                parts.next();
            }
            let legs = parse_legs(&raw_legs).map_err(CommandParseError::InvalidLegs)?;

            let mut request = EvRequest::new(payout_odds, legs);
            if let Some(boost) = parts.peek().and_then(|raw| raw.parse::<i32>().ok()) {
                request = request.with_boost(boost);
                parts.next();
            }

            let name = parts.collect::<Vec<_>>().join(" ");
            Ok(TelegramCommand::Ev(request.with_name(name)))
        }
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_integer(name: &'static str, raw: &str) -> Result<i32, CommandParseError> {
    raw.parse().map_err(|_| CommandParseError::InvalidInteger {
        name,
        value: raw.to_string(),
    })
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /ev <payout_odds> <fv_odds> [boost] [bet name] - 📊 EV, fair value and Kelly stakes\n\
    /help - Show this message\n\n\
    fv_odds are the fair-value odds of each leg, comma separated.\n\
    Example: /ev +250 -110,+120 25 Sunday parlay"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ev", "Use Probit devigging to get the EV of a bet"),
        ("help", "Show all commands"),
    ]
}
