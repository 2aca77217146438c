//! Fractional Kelly stake sizing.
//!
//! The Kelly fraction is computed from the EV percentage and the win
//! probability:
//!
//! ```text
//! b = 1 + ev / 100
//! k = (b * p - (1 - p)) / b
//! k = max(k, 0)
//! ```
//!
//! The full fraction is then scaled by 1, 1/2, 1/4 and 1/8 and applied to the
//! bankroll. A negative raw fraction means there is no edge and every stake
//! is zero.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::OddsError;
use super::probability::Probability;
use super::rounding::{round_dp, MONEY_DP};

/// Bankroll used when the caller does not supply one.
pub const DEFAULT_BANKROLL: Decimal = dec!(100);

/// One of the fixed Kelly multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KellyFraction {
    Full,
    Half,
    Quarter,
    Eighth,
}

impl KellyFraction {
    /// All fractions in reporting order.
    pub const ALL: [Self; 4] = [Self::Full, Self::Half, Self::Quarter, Self::Eighth];

    /// Multiplier applied to the full Kelly fraction.
    #[must_use]
    pub const fn multiplier(self) -> Decimal {
        match self {
            Self::Full => dec!(1),
            Self::Half => dec!(0.5),
            Self::Quarter => dec!(0.25),
            Self::Eighth => dec!(0.125),
        }
    }

    /// Short label used in rendered output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Half => "1/2",
            Self::Quarter => "1/4",
            Self::Eighth => "1/8",
        }
    }
}

impl fmt::Display for KellyFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggested stake and total return for one Kelly fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KellyLine {
    pub fraction: KellyFraction,
    /// Units to stake, two decimal places.
    pub stake: Decimal,
    /// Units returned if the bet wins, stake included, two decimal places.
    pub payout: Decimal,
}

/// Full Kelly fraction, clamped at zero.
///
/// # Errors
///
/// Returns [`OddsError::DegenerateEv`] when `ev_percent` is -100 or below,
/// where the payout multiplier is no longer positive.
pub fn kelly_fraction(
    ev_percent: Decimal,
    win_probability: Probability,
) -> Result<Decimal, OddsError> {
    let b = Decimal::ONE + ev_percent / Decimal::ONE_HUNDRED;
    if b <= Decimal::ZERO {
        return Err(OddsError::DegenerateEv { ev_percent });
    }

    let p = win_probability.value();
    let k = (b * p - (Decimal::ONE - p)) / b;
    Ok(k.max(Decimal::ZERO))
}

/// Stakes and payouts for the Full, 1/2, 1/4 and 1/8 Kelly fractions.
///
/// # Errors
///
/// - [`OddsError::DegenerateEv`] when `ev_percent` is -100 or below.
/// - [`OddsError::InvalidInput`] when `bankroll` is negative or too large
///   to stake, or `win_probability` lies outside [0, 1].
///
/// # Examples
///
/// ```
/// use evcalc::domain::kelly::{compute_kelly_stakes, DEFAULT_BANKROLL};
/// use rust_decimal_macros::dec;
///
/// let lines = compute_kelly_stakes(DEFAULT_BANKROLL, dec!(10), dec!(0.6)).unwrap();
/// assert_eq!(lines[0].stake, dec!(23.64));
/// assert_eq!(lines[0].payout, dec!(26.00));
/// ```
pub fn compute_kelly_stakes(
    bankroll: Decimal,
    ev_percent: Decimal,
    win_probability: Decimal,
) -> Result<[KellyLine; 4], OddsError> {
    if bankroll < Decimal::ZERO {
        return Err(OddsError::invalid_input(format!(
            "bankroll must not be negative, got {bankroll}"
        )));
    }
    let win_probability = Probability::try_new(win_probability)?;

    let k = kelly_fraction(ev_percent, win_probability)?;
    let b = Decimal::ONE + ev_percent / Decimal::ONE_HUNDRED;

    let line = |fraction: KellyFraction| -> Result<KellyLine, OddsError> {
        let too_large =
            || OddsError::invalid_input(format!("bankroll {bankroll} is too large to stake"));
        let stake = k
            .checked_mul(bankroll)
            .and_then(|stake| stake.checked_mul(fraction.multiplier()))
            .map(|stake| round_dp(stake, MONEY_DP))
            .ok_or_else(too_large)?;
        let payout = stake
            .checked_mul(b)
            .map(|payout| round_dp(payout, MONEY_DP))
            .ok_or_else(too_large)?;
        Ok(KellyLine {
            fraction,
            stake,
            payout,
        })
    };

    let [full, half, quarter, eighth] = KellyFraction::ALL;
    Ok([line(full)?, line(half)?, line(quarter)?, line(eighth)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_edge_lines() {
        let lines = compute_kelly_stakes(dec!(100), dec!(10), dec!(0.6)).unwrap();

        let stakes: Vec<Decimal> = lines.iter().map(|l| l.stake).collect();
        let payouts: Vec<Decimal> = lines.iter().map(|l| l.payout).collect();
        assert_eq!(stakes, vec![dec!(23.64), dec!(11.82), dec!(5.91), dec!(2.95)]);
        // 2.95 * 1.1 = 3.245 rounds away from zero
        assert_eq!(payouts, vec![dec!(26.00), dec!(13.00), dec!(6.50), dec!(3.25)]);
    }

    #[test]
    fn lines_come_in_fixed_order() {
        let lines = compute_kelly_stakes(dec!(100), dec!(10), dec!(0.6)).unwrap();
        let order: Vec<KellyFraction> = lines.iter().map(|l| l.fraction).collect();
        assert_eq!(order, KellyFraction::ALL.to_vec());
    }

    #[test]
    fn stakes_shrink_with_the_multiplier() {
        let lines = compute_kelly_stakes(dec!(1000), dec!(25), dec!(0.45)).unwrap();
        for pair in lines.windows(2) {
            assert!(pair[0].stake > pair[1].stake);
        }
    }

    #[test]
    fn documented_default_example_has_no_edge() {
        // k = ((1.0036 * 0.136) - 0.864) / 1.0036 < 0
        let lines = compute_kelly_stakes(DEFAULT_BANKROLL, dec!(0.36), dec!(0.136)).unwrap();
        for pair in lines.windows(2) {
            assert!(pair[0].stake >= pair[1].stake);
        }
        for line in lines {
            assert_eq!(line.stake, dec!(0.00));
            assert_eq!(line.payout, dec!(0.00));
        }
    }

    #[test]
    fn ev_of_minus_100_is_degenerate() {
        assert_eq!(
            compute_kelly_stakes(dec!(100), dec!(-100), dec!(0.5)),
            Err(OddsError::DegenerateEv {
                ev_percent: dec!(-100)
            })
        );
        assert!(matches!(
            compute_kelly_stakes(dec!(100), dec!(-150), dec!(0.5)),
            Err(OddsError::DegenerateEv { .. })
        ));
    }

    #[test]
    fn rejects_bad_bankroll_and_probability() {
        assert!(matches!(
            compute_kelly_stakes(dec!(-1), dec!(10), dec!(0.6)),
            Err(OddsError::InvalidInput { .. })
        ));
        assert!(matches!(
            compute_kelly_stakes(dec!(100), dec!(10), dec!(1.2)),
            Err(OddsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn oversized_bankroll_is_an_error() {
        // k = (2 * 0.9 - 0.1) / 2 = 0.85, so the payout is 1.7x the bankroll
        let result = compute_kelly_stakes(Decimal::MAX, dec!(100), dec!(0.9));
        assert!(
            matches!(&result, Err(OddsError::InvalidInput { reason }) if reason.contains("too large")),
            "{result:?}"
        );
    }

    #[test]
    fn certain_win_stakes_whole_bankroll() {
        let k = kelly_fraction(dec!(50), Probability::ONE).unwrap();
        assert_eq!(k, dec!(1));
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = KellyFraction::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Full", "1/2", "1/4", "1/8"]);
    }
}
