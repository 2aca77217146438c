//! End-to-end properties of the odds math and the calculator service.

use evcalc::application::calculator::{EvCalculator, EvRequest};
use evcalc::domain::{
    compute_expected_value, compute_kelly_stakes, devig, fair_value_odds, implied_probability,
    FairOdds, KellyFraction, OddsError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn implied_probability_of_even_money_is_half() {
    assert_eq!(implied_probability(100).unwrap().value(), dec!(0.5));
    assert_eq!(implied_probability(-100).unwrap().value(), dec!(0.5));
}

#[test]
fn implied_probability_stays_in_unit_interval() {
    for odds in [-100_000, -500, -101, 101, 250, 10_000, 99_999] {
        let p = implied_probability(odds).unwrap().value();
        assert!(p > Decimal::ZERO && p < Decimal::ONE, "{odds} -> {p}");
    }
}

#[test]
fn favorites_are_more_likely_than_underdogs() {
    let favorite = implied_probability(-150).unwrap();
    let underdog = implied_probability(150).unwrap();
    assert!(favorite > underdog);
}

#[test]
fn devig_is_product_of_leg_probabilities() {
    let parlay = devig(&[-110, 150]).unwrap();
    let product = implied_probability(-110).unwrap().value() * dec!(0.4);
    assert_eq!(parlay.value(), product);
}

#[test]
fn adding_a_leg_never_raises_probability() {
    let single = devig(&[-200]).unwrap();
    let double = devig(&[-200, -200]).unwrap();
    assert!(double < single);
}

#[test]
fn fair_value_round_trips_through_implied_probability() {
    for odds in [-300, -150, 120, 264, 1000] {
        let p = implied_probability(odds).unwrap();
        assert_eq!(fair_value_odds(p).unwrap(), i64::from(odds), "{odds}");
    }
}

#[test]
fn fair_bet_has_zero_ev() {
    let result = compute_expected_value(100, &[100], 0).unwrap();
    assert_eq!(result.ev_percent, dec!(0.0));
    assert_eq!(result.win_probability_percent, dec!(50.0));
    assert_eq!(result.fair_odds, FairOdds::Line(-100));
}

#[test]
fn two_leg_parlay_at_plus_150_is_negative() {
    let result = compute_expected_value(150, &[-110, -110], 0).unwrap();
    assert_eq!(result.ev_percent, dec!(-31.4));
    assert_eq!(result.win_probability_percent, dec!(27.4));
    assert_eq!(result.fair_odds, FairOdds::Line(264));
}

#[test]
fn boost_raises_ev_by_boosted_payout() {
    let plain = compute_expected_value(100, &[-110], 0).unwrap();
    let boosted = compute_expected_value(100, &[-110], 20).unwrap();
    assert_eq!(plain.ev_percent, dec!(4.8));
    assert_eq!(boosted.ev_percent, dec!(15.2));
    assert_eq!(plain.fair_odds, boosted.fair_odds);
}

#[test]
fn zero_odds_are_rejected_everywhere() {
    assert_eq!(
        compute_expected_value(0, &[-110], 0),
        Err(OddsError::InvalidOdds { odds: 0 })
    );
    assert_eq!(
        compute_expected_value(-110, &[-110, 0], 0),
        Err(OddsError::InvalidOdds { odds: 0 })
    );
}

#[test]
fn kelly_stakes_shrink_with_fraction() {
    let lines = compute_kelly_stakes(dec!(100), dec!(10), dec!(0.6)).unwrap();
    assert_eq!(lines.map(|line| line.fraction), KellyFraction::ALL);
    for pair in lines.windows(2) {
        assert!(pair[0].stake >= pair[1].stake);
    }
    assert_eq!(lines[0].stake, dec!(23.64));
    assert_eq!(lines[3].payout, dec!(3.25));
}

#[test]
fn negative_ev_never_stakes() {
    let result = compute_expected_value(150, &[-110, -110], 0).unwrap();
    let lines =
        compute_kelly_stakes(dec!(100), result.ev_percent, result.win_probability()).unwrap();
    assert!(lines.iter().all(|line| line.stake.is_zero() && line.payout.is_zero()));
}

#[test]
fn calculator_report_matches_domain_result() {
    let request = EvRequest::parse(300, "-110,-110").unwrap().with_name("Two-leg");
    let report = EvCalculator::new(dec!(1000)).evaluate(request).unwrap();

    let direct = compute_expected_value(300, &[-110, -110], 0).unwrap();
    assert_eq!(report.result, direct);
    assert_eq!(report.name, "Two-leg");
    assert_eq!(report.bankroll, dec!(1000));
    assert!(report.result.is_positive());
    assert!(report.kelly[0].stake > Decimal::ZERO);
}

#[test]
fn calculator_rejects_unparseable_legs() {
    assert!(matches!(
        EvRequest::parse(150, "-110, nope"),
        Err(OddsError::InvalidInput { .. })
    ));
}
