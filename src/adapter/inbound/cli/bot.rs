//! Handler for the `bot` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::TelegramAppConfig;

/// Execute the bot command.
///
/// Loads configuration, initializes logging and runs the Telegram bot in the
/// foreground until Ctrl-C.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;

    if !config.telegram.enabled {
        return Err(ConfigError::InvalidValue {
            field: "telegram.enabled",
            reason: "the Telegram bot is disabled in this configuration".to_string(),
        }
        .into());
    }
    let bot_token =
        TelegramAppConfig::token_from_env().ok_or(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN",
        })?;

    config.init_logging();
    info!(config = %args.config.display(), "evcalc bot starting");

    if !output::is_quiet() && !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Config", args.config.display());
        output::field("Bankroll", format!("{}u", config.kelly.bankroll.normalize()));
    }

    run_bot(&config, bot_token).await
}

#[cfg(feature = "telegram")]
async fn run_bot(config: &Config, bot_token: String) -> Result<()> {
    use crate::adapter::inbound::telegram::bot::{self, TelegramBotConfig};
    use crate::application::calculator::EvCalculator;

    let bot_config = TelegramBotConfig {
        bot_token,
        register_commands: config.telegram.register_commands,
    };
    bot::run(bot_config, EvCalculator::new(config.kelly.bankroll)).await
}

#[cfg(not(feature = "telegram"))]
async fn run_bot(_config: &Config, _bot_token: String) -> Result<()> {
    Err(ConfigError::InvalidValue {
        field: "telegram",
        reason: "evcalc was built without the `telegram` feature".to_string(),
    }
    .into())
}
