//! Single-leg payoff computation.

use num_traits::Float;
use optlab_core::{Contract, PayoffCurve, PayoffError, SamplingWindow};

/// Computes the payoff curve of one leg over a sampling window.
///
/// For every sampled spot `x` the holder's per-unit payoff is
/// `max(x - K - P, -P)` for a call and `max(K - x - P, -P)` for a put; a
/// sold leg negates it and the result is scaled by the leg's quantity.
///
/// # Errors
/// Never fails for values built through the validated constructors; the
/// `Result` keeps the signature uniform with
/// [`compute_portfolio_payoff`](crate::compute_portfolio_payoff).
///
/// # Examples
/// ```
/// use optlab_core::{Contract, Direction, OptionType, SamplingWindow};
/// use optlab_engine::compute_payoff;
///
/// let leg = Contract::new(OptionType::Call, 102.0_f64, Direction::Buy, 2.0, 1).unwrap();
/// let window = SamplingWindow::new(100.0, 10.0).unwrap();
///
/// let curve = compute_payoff(&leg, &window).unwrap();
/// let (spot, payoff) = curve.get(curve.len() - 1).unwrap();
/// assert!((spot - 110.0).abs() < 1e-9);
/// assert!((payoff - 6.0).abs() < 1e-9);
/// ```
pub fn compute_payoff<T: Float>(
    contract: &Contract<T>,
    window: &SamplingWindow<T>,
) -> Result<PayoffCurve<T>, PayoffError> {
    Ok(PayoffCurve::from_fn(window.spot_prices(), |x| contract.payoff_at(x)))
}

/// Adds one leg's payoff into an accumulator of the same length as the
/// window, without allocating a per-leg curve.
pub(crate) fn accumulate_leg<T: Float>(
    acc: &mut [T],
    contract: &Contract<T>,
    window: &SamplingWindow<T>,
) {
    for (i, slot) in acc.iter_mut().enumerate() {
        *slot = *slot + contract.payoff_at(window.sample(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optlab_core::{Direction, OptionType};

    fn window() -> SamplingWindow<f64> {
        SamplingWindow::new(100.0, 10.0).unwrap()
    }

    #[test]
    fn test_long_call_worked_example() {
        let leg = Contract::new(OptionType::Call, 102.0, Direction::Buy, 2.0, 1).unwrap();
        let curve = compute_payoff(&leg, &window()).unwrap();

        assert_eq!(curve.len(), 2001);
        let (first_spot, first_payoff) = curve.get(0).unwrap();
        assert_relative_eq!(first_spot, 90.0, epsilon = 1e-10);
        assert_relative_eq!(first_payoff, -2.0);

        let (mid_spot, mid_payoff) = curve.get(1000).unwrap();
        assert_relative_eq!(mid_spot, 100.0, epsilon = 1e-10);
        assert_relative_eq!(mid_payoff, -2.0);

        let (top_spot, top_payoff) = curve.get(2000).unwrap();
        assert_relative_eq!(top_spot, 110.0, epsilon = 1e-10);
        assert_relative_eq!(top_payoff, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_long_put_lowest_sample() {
        let leg = Contract::new(OptionType::Put, 98.0, Direction::Buy, 1.5, 2).unwrap();
        let curve = compute_payoff(&leg, &window()).unwrap();

        let (x_min, payoff) = curve.get(0).unwrap();
        assert_relative_eq!(payoff, (98.0 - x_min - 1.5) * 2.0, epsilon = 1e-10);
        assert!(curve.payoffs().iter().all(|&p| p >= -1.5 * 2.0 - 1e-12));
    }

    #[test]
    fn test_short_put_mirrors_long_put() {
        let long = Contract::new(OptionType::Put, 100.0, Direction::Buy, 3.0, 1).unwrap();
        let short = long.with_direction(Direction::Sell);

        let long_curve = compute_payoff(&long, &window()).unwrap();
        let short_curve = compute_payoff(&short, &window()).unwrap();

        assert_eq!(long_curve.spots(), short_curve.spots());
        for (l, s) in long_curve.payoffs().iter().zip(short_curve.payoffs()) {
            assert_eq!(*s, -*l);
        }
    }

    #[test]
    fn test_short_call_capped_at_premium_received() {
        let leg = Contract::new(OptionType::Call, 105.0, Direction::Sell, 1.0, 1).unwrap();
        let curve = compute_payoff(&leg, &window()).unwrap();
        assert!(curve.payoffs().iter().all(|&p| p <= 1.0));
        assert_relative_eq!(curve.payoffs()[0], 1.0);
    }

    #[test]
    fn test_accumulate_leg_matches_compute_payoff() {
        let leg = Contract::new(OptionType::Call, 101.0, Direction::Buy, 0.75, 3).unwrap();
        let w = window();
        let mut acc = vec![0.0; w.len()];
        accumulate_leg(&mut acc, &leg, &w);

        let curve = compute_payoff(&leg, &w).unwrap();
        assert_eq!(acc.as_slice(), curve.payoffs());
    }

    #[test]
    fn test_zero_range_window() {
        let leg = Contract::new(OptionType::Call, 90.0, Direction::Buy, 4.0, 1).unwrap();
        let w = SamplingWindow::new(100.0, 0.0).unwrap();
        let curve = compute_payoff(&leg, &w).unwrap();
        assert_eq!(curve.len(), 1);
        assert_relative_eq!(curve.payoffs()[0], 6.0);
    }
}
