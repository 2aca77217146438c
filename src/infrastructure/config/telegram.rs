//! Telegram bot configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Environment variables checked, in order, for the bot token.
pub const TOKEN_ENV_VARS: [&str; 2] = ["TELEGRAM_BOT_TOKEN", "TOKEN"];

/// Telegram bot configuration.
///
/// The bot token is a secret and is never read from the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramAppConfig {
    /// Allow `evcalc bot` to start.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Register `/ev` and `/help` with Telegram's "/" menu on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl TelegramAppConfig {
    /// Bot token from the environment, if set and non-empty.
    #[must_use]
    pub fn token_from_env() -> Option<String> {
        TOKEN_ENV_VARS.iter().find_map(|name| {
            std::env::var(name)
                .ok()
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
        })
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            register_commands: default_true(),
        }
    }
}
