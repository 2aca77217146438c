//! Command-line interface definitions.
//!
//! Defines the CLI structure for evcalc using `clap`: a one-shot `ev`
//! calculation, the Telegram `bot`, and configuration checks.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::infrastructure::config::settings::DEFAULT_CONFIG_PATH;

/// Betting EV, fair value and Kelly stake calculator
#[derive(Parser, Debug)]
#[command(name = "evcalc")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the evcalc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate EV, fair value and Kelly stakes for one bet
    Ev(EvArgs),

    /// Run the Telegram bot (foreground)
    Bot(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `evcalc config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for `evcalc ev`.
#[derive(Parser, Debug)]
pub struct EvArgs {
    /// Odds of the bet (American, e.g. +150 or -110)
    #[arg(allow_negative_numbers = true)]
    pub payout_odds: i32,

    /// Fair value odds of each leg (comma separated, e.g. -110,+120)
    #[arg(allow_hyphen_values = true)]
    pub fv_odds: String,

    /// Boost to add to the payout odds
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub boost: i32,

    /// Name of the bet
    #[arg(short, long)]
    pub name: Option<String>,

    /// Bankroll for Kelly stakes (overrides config)
    #[arg(long)]
    pub bankroll: Option<Decimal>,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
