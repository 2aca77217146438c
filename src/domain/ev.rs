//! Expected value of a bet priced against devigged fair-value legs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::OddsError;
use super::odds::{fair_value_odds, AmericanOdds, FairOdds};
use super::probability::{devig, Probability};
use super::rounding::{round_dp, PERCENT_DP};

/// Result of an EV calculation. All values are already rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvResult {
    /// Expected return in percent of stake, one decimal place.
    pub ev_percent: Decimal,
    /// Devigged win probability in percent, one decimal place.
    pub win_probability_percent: Decimal,
    /// Fair price of the devigged probability.
    pub fair_odds: FairOdds,
}

impl EvResult {
    /// The rounded win probability as a fraction, as fed to Kelly staking.
    #[must_use]
    pub fn win_probability(&self) -> Decimal {
        self.win_probability_percent / Decimal::ONE_HUNDRED
    }

    /// True when the bet has a positive edge.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.ev_percent > Decimal::ZERO
    }
}

/// Compute the EV of taking `payout_odds` (plus `boost`) on a bet whose true
/// price is given by the fair-value `legs`.
///
/// `boost` is added to the payout odds before they are converted to a
/// decimal multiplier.
///
/// # Errors
///
/// - [`OddsError::InvalidOdds`] when the payout, the boosted payout or any
///   leg is zero, or the boosted payout overflows.
/// - [`OddsError::InvalidInput`] when `legs` is empty.
/// - [`OddsError::ImpossibleOutcome`] when the legs devig to a probability
///   too small to price.
///
/// # Examples
///
/// ```
/// use evcalc::domain::ev::compute_expected_value;
/// use evcalc::domain::odds::FairOdds;
/// use rust_decimal_macros::dec;
///
/// let result = compute_expected_value(100, &[100], 0).unwrap();
/// assert_eq!(result.ev_percent, dec!(0.0));
/// assert_eq!(result.win_probability_percent, dec!(50.0));
/// assert_eq!(result.fair_odds, FairOdds::Line(-100));
/// ```
pub fn compute_expected_value(
    payout_odds: i32,
    legs: &[i32],
    boost: i32,
) -> Result<EvResult, OddsError> {
    AmericanOdds::try_new(payout_odds)?;
    let win_probability = devig(legs)?;

    let boosted = payout_odds
        .checked_add(boost)
        .ok_or(OddsError::InvalidOdds {
            odds: i64::from(payout_odds) + i64::from(boost),
        })?;
    let multiplier = AmericanOdds::try_new(boosted)?.decimal_multiplier();

    let ev = (multiplier * win_probability.value() - Decimal::ONE) * Decimal::ONE_HUNDRED;

    Ok(EvResult {
        ev_percent: round_dp(ev, PERCENT_DP),
        win_probability_percent: round_dp(win_probability.percent(), PERCENT_DP),
        fair_odds: price(win_probability)?,
    })
}

fn price(p: Probability) -> Result<FairOdds, OddsError> {
    match fair_value_odds(p) {
        Ok(odds) => Ok(FairOdds::Line(odds)),
        Err(OddsError::CertainOutcome) => Ok(FairOdds::Infinite),
        Err(e) => Err(e),
    }
}
