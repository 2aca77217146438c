use std::fs;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use evcalc::error::{ConfigError, Error};
use evcalc::infrastructure::config::logging::LogFormat;
use evcalc::infrastructure::config::settings::Config;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"
format = "json"

[kelly]
bankroll = 1000

[telegram]
register_commands = false
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.kelly.bankroll, dec!(1000));
    assert!(config.telegram.enabled);
    assert!(!config.telegram.register_commands);
}

#[test]
fn config_rejects_negative_bankroll() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[kelly]\nbankroll = -10\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "bankroll",
            ..
        })
    ));
    assert!(err.to_string().contains("bankroll"));
}

#[test]
fn config_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[kelly\nbankroll = 10\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn load_or_default_uses_defaults_when_missing() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.kelly.bankroll, dec!(100));
    assert_eq!(config.logging.level, "info");
}
