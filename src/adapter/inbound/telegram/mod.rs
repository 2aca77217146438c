//! Telegram bot integration.
//!
//! Parses `/ev` commands, runs them through the calculator and renders the
//! report. Only [`bot`] talks to the network.

pub mod command;
pub mod format;
pub mod reply;

#[cfg(feature = "telegram")]
pub mod bot;
