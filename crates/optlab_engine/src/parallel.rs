//! Rayon-parallel multi-leg aggregation.
//!
//! Legs are evaluated on the rayon pool and reduced by pointwise summation.
//! Worth it for portfolios with many legs or very fine sampling grids; for a
//! handful of legs the sequential [`compute_portfolio_payoff`] is faster.
//!
//! [`compute_portfolio_payoff`]: crate::compute_portfolio_payoff

use num_traits::Float;
use optlab_core::{Contract, PayoffCurve, PayoffError, SamplingWindow};
use rayon::prelude::*;

use crate::payoff::accumulate_leg;

/// Parallel counterpart of [`compute_portfolio_payoff`](crate::compute_portfolio_payoff).
///
/// Results equal the sequential path up to floating-point summation order.
///
/// # Errors
/// `PayoffError::EmptyPortfolio` if `contracts` is empty.
pub fn compute_portfolio_payoff_par<T>(
    contracts: &[Contract<T>],
    window: &SamplingWindow<T>,
) -> Result<PayoffCurve<T>, PayoffError>
where
    T: Float + Send + Sync,
{
    if contracts.is_empty() {
        return Err(PayoffError::EmptyPortfolio);
    }

    let n = window.len();
    let aggregate = contracts
        .par_iter()
        .fold(
            || vec![T::zero(); n],
            |mut acc, contract| {
                accumulate_leg(&mut acc, contract, window);
                acc
            },
        )
        .reduce(
            || vec![T::zero(); n],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l = *l + r;
                }
                left
            },
        );

    PayoffCurve::new(window.spot_prices(), aggregate)
}
