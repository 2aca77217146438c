//! Kelly staking configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_BANKROLL;

/// Kelly staking configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KellyConfig {
    /// Bankroll, in units, that Kelly fractions are applied to (default: 100).
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,
}

const fn default_bankroll() -> Decimal {
    DEFAULT_BANKROLL
}

impl Default for KellyConfig {
    fn default() -> Self {
        Self {
            bankroll: default_bankroll(),
        }
    }
}
