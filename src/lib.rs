//! evcalc - Expected value, fair odds and Kelly stakes for sports bets.
//!
//! Given the American odds a book offers (the payout odds) and the
//! vig-free fair-value odds of each leg, evcalc computes the bet's expected
//! value, its true win probability, the fair American line and fractional
//! Kelly stakes.
//!
//! # Modules
//!
//! - [`domain`] - Pure odds math: implied probability, devig, EV, Kelly
//! - [`application`] - The calculator service shared by every front end
//! - [`adapter`] - Terminal CLI and Telegram bot
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Enable the Telegram bot via teloxide
//!
//! # Example
//!
//! ```
//! use evcalc::application::calculator::{EvCalculator, EvRequest};
//!
//! let request = EvRequest::parse(150, "-110, -110").unwrap();
//! let report = EvCalculator::default().evaluate(request).unwrap();
//! assert_eq!(report.result.fair_odds.to_string(), "+264");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
