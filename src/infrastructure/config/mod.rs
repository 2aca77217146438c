//! Infrastructure configuration modules.

pub mod kelly;
pub mod logging;
pub mod settings;
pub mod telegram;
