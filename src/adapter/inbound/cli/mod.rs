//! CLI module graph.

pub mod bot;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod ev;
pub mod output;
