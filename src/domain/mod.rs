//! Pure odds math: devigging, expected value and Kelly staking.
//!
//! Nothing in this module performs I/O or logs. Every function is
//! deterministic and safe to call from any thread.

pub mod error;
pub mod ev;
pub mod kelly;
pub mod odds;
pub mod probability;
pub mod rounding;

pub use error::OddsError;
pub use ev::{compute_expected_value, EvResult};
pub use kelly::{compute_kelly_stakes, KellyFraction, KellyLine, DEFAULT_BANKROLL};
pub use odds::{fair_value_odds, implied_probability, AmericanOdds, FairOdds};
pub use probability::{devig, Probability};
