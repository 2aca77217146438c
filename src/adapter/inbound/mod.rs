//! Inbound adapters.

pub mod cli;
pub mod telegram;
