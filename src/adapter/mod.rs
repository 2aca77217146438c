//! Adapters that drive the application: the terminal CLI and the Telegram bot.

pub mod inbound;
