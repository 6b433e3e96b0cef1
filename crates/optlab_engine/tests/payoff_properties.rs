//! Property-based tests for the payoff engine.
//!
//! Covers the algebraic properties every payoff curve must satisfy:
//! premium floors, buy/sell mirroring, linearity in quantity and pointwise
//! aggregation of legs.

use optlab_core::{Contract, Direction, OptionType, PayoffError, SamplingWindow};
use optlab_engine::{compute_payoff, compute_portfolio_payoff};
use proptest::prelude::*;

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Buy), Just(Direction::Sell)]
}

fn contract_strategy() -> impl Strategy<Value = Contract<f64>> {
    (
        option_type_strategy(),
        50.0..150.0f64,
        direction_strategy(),
        0.0..10.0f64,
        1u32..20,
    )
        .prop_map(|(option_type, strike, direction, premium, quantity)| {
            Contract::new(option_type, strike, direction, premium, quantity).unwrap()
        })
}

fn window_strategy() -> impl Strategy<Value = SamplingWindow<f64>> {
    (60.0..140.0f64, 0.0..30.0f64, prop_oneof![Just(0.01), Just(0.1), Just(0.5)])
        .prop_map(|(spot, range, step)| {
            SamplingWindow::new(spot, range)
                .unwrap()
                .with_step(step)
                .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_long_payoff_never_below_premium_paid(
        contract in contract_strategy(),
        window in window_strategy(),
    ) {
        let contract = contract.with_direction(Direction::Buy);
        let curve = compute_payoff(&contract, &window).unwrap();
        let floor = -contract.premium() * contract.quantity() as f64;

        for &p in curve.payoffs() {
            prop_assert!(p >= floor - 1e-9);
        }
    }

    #[test]
    fn test_long_call_at_highest_sample(
        strike in 50.0..150.0f64,
        premium in 0.0..10.0f64,
        quantity in 1u32..20,
        window in window_strategy(),
    ) {
        let contract =
            Contract::new(OptionType::Call, strike, Direction::Buy, premium, quantity).unwrap();
        let curve = compute_payoff(&contract, &window).unwrap();
        let (x_max, payoff) = curve.get(curve.len() - 1).unwrap();

        let expected = (x_max - strike - premium).max(-premium) * quantity as f64;
        prop_assert!((payoff - expected).abs() < 1e-9);
    }

    #[test]
    fn test_long_put_at_lowest_sample(
        strike in 50.0..150.0f64,
        premium in 0.0..10.0f64,
        quantity in 1u32..20,
        window in window_strategy(),
    ) {
        let contract =
            Contract::new(OptionType::Put, strike, Direction::Buy, premium, quantity).unwrap();
        let curve = compute_payoff(&contract, &window).unwrap();
        let (x_min, payoff) = curve.get(0).unwrap();

        let expected = (strike - x_min - premium).max(-premium) * quantity as f64;
        prop_assert!((payoff - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sell_mirrors_buy(
        contract in contract_strategy(),
        window in window_strategy(),
    ) {
        let bought = compute_payoff(&contract.with_direction(Direction::Buy), &window).unwrap();
        let sold = compute_payoff(&contract.with_direction(Direction::Sell), &window).unwrap();

        prop_assert_eq!(bought.spots(), sold.spots());
        for (b, s) in bought.payoffs().iter().zip(sold.payoffs()) {
            prop_assert_eq!(*s, -*b);
        }
    }

    #[test]
    fn test_quantity_scales_linearly(
        contract in contract_strategy(),
        n in 1u32..50,
        window in window_strategy(),
    ) {
        let unit = compute_payoff(&contract.with_quantity(1).unwrap(), &window).unwrap();
        let scaled = compute_payoff(&contract.with_quantity(n).unwrap(), &window).unwrap();

        for (u, s) in unit.payoffs().iter().zip(scaled.payoffs()) {
            prop_assert!((s - n as f64 * u).abs() <= 1e-9 * (1.0 + s.abs()));
        }
    }

    #[test]
    fn test_aggregate_is_pointwise_sum(
        a in contract_strategy(),
        b in contract_strategy(),
        window in window_strategy(),
    ) {
        let aggregate = compute_portfolio_payoff(&[a, b], &window).unwrap();
        let curve_a = compute_payoff(&a, &window).unwrap();
        let curve_b = compute_payoff(&b, &window).unwrap();

        prop_assert_eq!(aggregate.len(), window.len());
        for i in 0..aggregate.len() {
            prop_assert_eq!(
                aggregate.payoffs()[i],
                curve_a.payoffs()[i] + curve_b.payoffs()[i]
            );
        }
    }

    #[test]
    fn test_aggregate_matches_checked_add(
        legs in proptest::collection::vec(contract_strategy(), 1..6),
        window in window_strategy(),
    ) {
        let aggregate = compute_portfolio_payoff(&legs, &window).unwrap();

        let mut expected = compute_payoff(&legs[0], &window).unwrap();
        for leg in &legs[1..] {
            expected = expected.checked_add(&compute_payoff(leg, &window).unwrap()).unwrap();
        }

        for (x, y) in aggregate.payoffs().iter().zip(expected.payoffs()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }
}

#[test]
fn test_empty_portfolio_fails() {
    let window = SamplingWindow::new(100.0_f64, 10.0).unwrap();
    let result = compute_portfolio_payoff(&[], &window);
    assert_eq!(result, Err(PayoffError::EmptyPortfolio));
}

#[test]
fn test_straddle_option_type_rejected() {
    let result = Contract::parse("Straddle", 100.0_f64, "Buy", 1.0, 1);
    assert!(matches!(
        result,
        Err(PayoffError::InvalidContract {
            field: "option_type",
            ..
        })
    ));
}

#[test]
fn test_worked_example() {
    let leg = Contract::new(OptionType::Call, 102.0_f64, Direction::Buy, 2.0, 1).unwrap();
    let window = SamplingWindow::new(100.0, 10.0).unwrap();
    let curve = compute_payoff(&leg, &window).unwrap();

    let at = |target: f64| {
        curve
            .iter()
            .min_by(|(a, _), (b, _)| (a - target).abs().total_cmp(&(b - target).abs()))
            .map(|(_, p)| p)
            .unwrap()
    };

    assert!((curve.spots()[0] - 90.0).abs() < 1e-9);
    assert!((curve.spots()[curve.len() - 1] - 110.0).abs() < 1e-9);
    assert!((at(100.0) - (-2.0)).abs() < 1e-9);
    assert!((at(110.0) - 6.0).abs() < 1e-9);
}
