//! Win probabilities and multi-leg fair-value devigging.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::OddsError;
use super::odds::AmericanOdds;

/// A probability in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Probability(Decimal);

impl Probability {
    /// The certain outcome.
    pub const ONE: Self = Self(Decimal::ONE);

    /// The impossible outcome.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validate a raw probability.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::InvalidInput`] when `value` lies outside [0, 1].
    pub fn try_new(value: Decimal) -> Result<Self, OddsError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(OddsError::invalid_input(format!(
                "probability must be between 0 and 1, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// The probability as a fraction.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// The probability scaled to a percentage, unrounded.
    #[must_use]
    pub fn percent(self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Combined true win probability of one or more fair-value legs.
///
/// Each leg's implied probability is multiplied into the result, so every
/// additional leg lowers it. Order does not matter.
///
/// # Errors
///
/// - [`OddsError::InvalidInput`] when `legs` is empty.
/// - [`OddsError::InvalidOdds`] when any leg is zero.
///
/// # Examples
///
/// ```
/// use evcalc::domain::probability::devig;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(devig(&[100, 100]).unwrap().value(), dec!(0.25));
/// ```
pub fn devig(legs: &[i32]) -> Result<Probability, OddsError> {
    if legs.is_empty() {
        return Err(OddsError::invalid_input(
            "at least one fair-value leg is required",
        ));
    }

    legs.iter().try_fold(Probability::ONE, |combined, &leg| {
        let leg = AmericanOdds::try_new(leg)?.implied_probability();
        Ok(Probability(combined.0 * leg.0))
    })
}
