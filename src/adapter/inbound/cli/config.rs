//! Handler for `config validate`.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::TelegramAppConfig;

/// Validate a configuration file without starting the bot.
pub fn execute_validate<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    let config = match Config::parse_toml(&content) {
        Ok(config) => config,
        Err(err) => {
            if !output::is_json() {
                if let Some(diagnostic) =
                    ConfigDiagnostic::from_error(&path.display().to_string(), &content, &err)
                {
                    eprintln!("{:?}", miette::Report::new(diagnostic));
                }
            }
            return Err(err);
        }
    };
    let token_present = TelegramAppConfig::token_from_env().is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "config": serde_json::to_value(&config)?,
            "telegram_token_present": token_present,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Bankroll", format!("{}u", config.kelly.bankroll.normalize()));
    output::field("Log level", &config.logging.level);
    output::field("Log format", format!("{:?}", config.logging.format).to_lowercase());

    if config.telegram.enabled {
        if token_present {
            output::success("Telegram bot configured");
        } else {
            output::warning("Telegram enabled but TELEGRAM_BOT_TOKEN is not set");
        }
    } else {
        output::field("Telegram", "disabled");
    }

    Ok(())
}
