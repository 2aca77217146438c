//! Application services (use cases).
//!
//! These services orchestrate the domain math for the chat and terminal
//! front ends.

pub mod calculator;
