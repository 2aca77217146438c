//! EV calculator service.
//!
//! Turns a user request (payout price, comma-separated fair-value legs,
//! optional boost and bet name) into an [`EvReport`]: the EV triple plus the
//! four fractional-Kelly lines. Both the Telegram bot and the terminal CLI
//! call into this service.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    compute_expected_value, compute_kelly_stakes, EvResult, KellyLine, OddsError,
    DEFAULT_BANKROLL,
};

/// Bet name used when the user does not supply one.
pub const DEFAULT_BET_NAME: &str = "Unnamed Bet";

/// Parse a comma-separated list of American odds, e.g. `"-110, +150"`.
///
/// Zero is accepted here; the calculation rejects it with
/// [`OddsError::InvalidOdds`].
///
/// # Errors
///
/// Returns [`OddsError::InvalidInput`] naming the first token that is not an
/// integer, or when the list is empty.
pub fn parse_legs(raw: &str) -> Result<Vec<i32>, OddsError> {
    if raw.trim().is_empty() {
        return Err(OddsError::invalid_input("no fair-value odds given"));
    }

    raw.split(',')
        .map(str::trim)
        .map(|token| {
            if token.is_empty() {
                return Err(OddsError::invalid_input(format!(
                    "empty fair-value leg in `{}`",
                    raw.trim()
                )));
            }
            token.parse::<i32>().map_err(|_| {
                OddsError::invalid_input(format!("`{token}` is not a whole-number odds value"))
            })
        })
        .collect()
}

/// One EV calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvRequest {
    pub payout_odds: i32,
    pub legs: Vec<i32>,
    pub boost: i32,
    pub name: Option<String>,
}

impl EvRequest {
    /// Create a request with no boost and no name.
    #[must_use]
    pub fn new(payout_odds: i32, legs: Vec<i32>) -> Self {
        Self {
            payout_odds,
            legs,
            boost: 0,
            name: None,
        }
    }

    /// Create a request from the raw comma-separated leg string.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::InvalidInput`] when the legs cannot be parsed.
    pub fn parse(payout_odds: i32, raw_legs: &str) -> Result<Self, OddsError> {
        Ok(Self::new(payout_odds, parse_legs(raw_legs)?))
    }

    #[must_use]
    pub fn with_boost(mut self, boost: i32) -> Self {
        self.boost = boost;
        self
    }

    /// Attach a display name. Blank names fall back to the default.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name.trim().to_string())
        };
        self
    }
}

/// Everything needed to present one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvReport {
    pub name: String,
    pub payout_odds: i32,
    pub boost: i32,
    pub legs: Vec<i32>,
    pub bankroll: Decimal,
    pub result: EvResult,
    pub kelly: [KellyLine; 4],
}

impl EvReport {
    /// Legs joined back into the `a, b, c` form the user typed.
    #[must_use]
    pub fn legs_display(&self) -> String {
        self.legs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Stateless calculator bound to a bankroll.
#[derive(Debug, Clone, Copy)]
pub struct EvCalculator {
    bankroll: Decimal,
}

impl EvCalculator {
    #[must_use]
    pub const fn new(bankroll: Decimal) -> Self {
        Self { bankroll }
    }

    #[must_use]
    pub const fn bankroll(&self) -> Decimal {
        self.bankroll
    }

    /// Run the full devig -> EV -> Kelly pipeline for one request.
    ///
    /// Kelly staking is driven by the rounded EV percentage and the rounded
    /// win probability, the same numbers the user sees.
    ///
    /// # Errors
    ///
    /// Propagates any [`OddsError`] from the calculation.
    pub fn evaluate(&self, request: EvRequest) -> Result<EvReport, OddsError> {
        debug!(
            payout_odds = request.payout_odds,
            legs = ?request.legs,
            boost = request.boost,
            "Evaluating bet"
        );

        let result = compute_expected_value(request.payout_odds, &request.legs, request.boost)?;
        let kelly = compute_kelly_stakes(
            self.bankroll,
            result.ev_percent,
            result.win_probability(),
        )?;

        let name = request
            .name
            .unwrap_or_else(|| DEFAULT_BET_NAME.to_string());

        info!(
            bet = %name,
            ev_percent = %result.ev_percent,
            win_probability_percent = %result.win_probability_percent,
            fair_odds = %result.fair_odds,
            full_kelly_stake = %kelly[0].stake,
            "Bet evaluated"
        );

        Ok(EvReport {
            name,
            payout_odds: request.payout_odds,
            boost: request.boost,
            legs: request.legs,
            bankroll: self.bankroll,
            result,
            kelly,
        })
    }
}

impl Default for EvCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BANKROLL)
    }
}
