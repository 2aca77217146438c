//! American odds and their conversion to and from probabilities.
//!
//! Negative odds price a favorite (stake risked to win 100), positive odds
//! price an underdog (amount won on a 100 stake). Zero is not a price.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::OddsError;
use super::probability::Probability;
use super::rounding::round_dp;

const HUNDRED: Decimal = dec!(100);
const HALF: Decimal = dec!(0.5);

/// A nonzero price in American odds notation.
///
/// The inner value is private so every instance has passed the nonzero check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Validate a raw odds value.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::InvalidOdds`] when `value` is zero.
    pub fn try_new(value: i32) -> Result<Self, OddsError> {
        if value == 0 {
            return Err(OddsError::InvalidOdds { odds: 0 });
        }
        Ok(Self(value))
    }

    /// Raw signed odds value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// True for negative (favorite) pricing.
    #[must_use]
    pub const fn is_favorite(self) -> bool {
        self.0 < 0
    }

    /// Implied win probability, always in the open interval (0, 1).
    #[must_use]
    pub fn implied_probability(self) -> Probability {
        let odds = Decimal::from(i64::from(self.0));
        let p = if self.is_favorite() {
            -odds / (-odds + HUNDRED)
        } else {
            HUNDRED / (odds + HUNDRED)
        };
        Probability::new_unchecked(p)
    }

    /// Total return per unit staked, stake included (decimal odds).
    #[must_use]
    pub fn decimal_multiplier(self) -> Decimal {
        let odds = Decimal::from(i64::from(self.0));
        if self.is_favorite() {
            HUNDRED / -odds + Decimal::ONE
        } else {
            odds / HUNDRED + Decimal::ONE
        }
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Implied win probability of a raw American odds value.
///
/// # Errors
///
/// Returns [`OddsError::InvalidOdds`] when `odds` is zero.
///
/// # Examples
///
/// ```
/// use evcalc::domain::odds::implied_probability;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(implied_probability(150).unwrap().value(), dec!(0.4));
/// ```
pub fn implied_probability(odds: i32) -> Result<Probability, OddsError> {
    Ok(AmericanOdds::try_new(odds)?.implied_probability())
}

/// Fair price of a probability, as reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FairOdds {
    /// A finite American odds line.
    Line(i64),
    /// No finite price: the outcome is certain.
    Infinite,
}

impl fmt::Display for FairOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(odds) => write!(f, "{odds:+}"),
            Self::Infinite => write!(f, "+∞"),
        }
    }
}

/// Convert a probability back into American odds, rounded to a whole number.
///
/// Probabilities below one half map to positive odds; one half and above
/// map to negative odds.
///
/// # Errors
///
/// - [`OddsError::CertainOutcome`] when `p` is 1 (or so close that the
///   price exceeds the representable range).
/// - [`OddsError::ImpossibleOutcome`] when `p` is 0 (or so small that the
///   price exceeds the representable range).
pub fn fair_value_odds(p: Probability) -> Result<i64, OddsError> {
    let p = p.value();
    if p == Decimal::ONE {
        return Err(OddsError::CertainOutcome);
    }
    if p.is_zero() {
        return Err(OddsError::ImpossibleOutcome);
    }

    if p < HALF {
        HUNDRED
            .checked_div(p)
            .map(|inverse| round_dp(inverse - HUNDRED, 0))
            .and_then(|odds| odds.to_i64())
            .ok_or(OddsError::ImpossibleOutcome)
    } else {
        (-(HUNDRED * p))
            .checked_div(Decimal::ONE - p)
            .map(|odds| round_dp(odds, 0))
            .and_then(|odds| odds.to_i64())
            .ok_or(OddsError::CertainOutcome)
    }
}
