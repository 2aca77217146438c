//! Domain errors for the odds calculator.
//!
//! Every calculation in [`crate::domain`] fails fast with one of these
//! variants instead of returning a default value. Callers match on the
//! variant, never on the message text.
//!
//! # Examples
//!
//! ```
//! use evcalc::domain::error::OddsError;
//! use evcalc::domain::ev::compute_expected_value;
//!
//! let result = compute_expected_value(150, &[], 0);
//! assert!(matches!(result, Err(OddsError::InvalidInput { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when odds, probabilities or stakes leave their valid domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// American odds of zero, or a payout price that cannot be represented.
    #[error("invalid odds {odds}: American odds must be a nonzero integer")]
    InvalidOdds {
        /// The offending odds value.
        odds: i64,
    },

    /// Input that cannot be turned into a calculation (empty legs, bad token).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Kelly staking is undefined when the payout multiplier is zero or negative.
    #[error("degenerate EV {ev_percent}%: Kelly staking needs an EV above -100%")]
    DegenerateEv {
        /// The EV percentage that was supplied.
        ev_percent: Decimal,
    },

    /// A probability of exactly 1 has no finite odds price.
    #[error("certain outcome: a deterministic outcome has no odds price")]
    CertainOutcome,

    /// A probability of exactly 0 has no finite odds price.
    #[error("impossible outcome: a zero-probability outcome has no odds price")]
    ImpossibleOutcome,
}

impl OddsError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_name_the_offending_value() {
        assert!(OddsError::InvalidOdds { odds: 0 }
            .to_string()
            .contains("invalid odds 0"));
        assert!(OddsError::DegenerateEv {
            ev_percent: dec!(-100)
        }
        .to_string()
        .contains("-100%"));
        assert_eq!(
            OddsError::invalid_input("no legs").to_string(),
            "invalid input: no legs"
        );
    }
}
