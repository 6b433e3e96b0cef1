//! Multi-leg payoff aggregation.
//!
//! Every leg of a position is written on the same underlying, so every leg is
//! evaluated on the same spot scenarios. The aggregated payoff at sample `i`
//! is the sum of each leg's payoff at that sample.

use num_traits::Float;
use optlab_core::{Contract, PayoffCurve, PayoffError, SamplingWindow};

use crate::payoff::accumulate_leg;

/// Computes the aggregated payoff curve of several legs over one window.
///
/// `aggregate[i] = Σ_leg compute_payoff(leg, window)[i]`, with legs summed in
/// the order given.
///
/// # Errors
/// `PayoffError::EmptyPortfolio` if `contracts` is empty. No partial curve is
/// ever returned.
///
/// # Examples
/// ```
/// use optlab_core::{Contract, Direction, OptionType, SamplingWindow};
/// use optlab_engine::compute_portfolio_payoff;
///
/// // Long straddle at 100
/// let legs = [
///     Contract::new(OptionType::Call, 100.0_f64, Direction::Buy, 3.0, 1).unwrap(),
///     Contract::new(OptionType::Put, 100.0_f64, Direction::Buy, 2.0, 1).unwrap(),
/// ];
/// let window = SamplingWindow::new(100.0, 10.0).unwrap();
///
/// let curve = compute_portfolio_payoff(&legs, &window).unwrap();
/// let (_, at_spot) = curve.get(1000).unwrap();
/// assert!((at_spot + 5.0).abs() < 1e-9);
/// ```
pub fn compute_portfolio_payoff<T: Float>(
    contracts: &[Contract<T>],
    window: &SamplingWindow<T>,
) -> Result<PayoffCurve<T>, PayoffError> {
    if contracts.is_empty() {
        return Err(PayoffError::EmptyPortfolio);
    }

    let mut aggregate = vec![T::zero(); window.len()];
    for contract in contracts {
        accumulate_leg(&mut aggregate, contract, window);
    }

    PayoffCurve::new(window.spot_prices(), aggregate)
}

/// A non-empty, ordered collection of legs on one underlying.
///
/// # Examples
/// ```
/// use optlab_core::{Contract, Direction, OptionType, SamplingWindow};
/// use optlab_engine::Portfolio;
///
/// let mut portfolio = Portfolio::new(vec![
///     Contract::new(OptionType::Call, 100.0_f64, Direction::Buy, 4.0, 1).unwrap(),
/// ])
/// .unwrap();
/// portfolio.push(Contract::new(OptionType::Call, 110.0, Direction::Sell, 1.0, 1).unwrap());
///
/// assert_eq!(portfolio.len(), 2);
/// assert_eq!(portfolio.net_premium(), -3.0);
///
/// let window = SamplingWindow::new(105.0, 10.0).unwrap();
/// let curve = portfolio.payoff(&window).unwrap();
/// assert_eq!(curve.len(), window.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Contract<T>>", into = "Vec<Contract<T>>")
)]
pub struct Portfolio<T: Float> {
    legs: Vec<Contract<T>>,
}

impl<T: Float> Portfolio<T> {
    /// Creates a portfolio from its legs.
    ///
    /// # Errors
    /// `PayoffError::EmptyPortfolio` if `legs` is empty.
    pub fn new(legs: Vec<Contract<T>>) -> Result<Self, PayoffError> {
        if legs.is_empty() {
            return Err(PayoffError::EmptyPortfolio);
        }
        Ok(Self { legs })
    }

    /// Appends a leg.
    pub fn push(&mut self, leg: Contract<T>) {
        self.legs.push(leg);
    }

    /// Appends several legs.
    pub fn extend<I>(&mut self, legs: I)
    where
        I: IntoIterator<Item = Contract<T>>,
    {
        self.legs.extend(legs);
    }

    /// The legs in insertion order.
    #[inline]
    pub fn legs(&self) -> &[Contract<T>] {
        &self.legs
    }

    /// Number of legs.
    #[inline]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false: a portfolio holds at least one leg.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Net premium of all legs: negative for a net debit, positive for a
    /// net credit.
    pub fn net_premium(&self) -> T {
        self.legs
            .iter()
            .fold(T::zero(), |acc, leg| acc + leg.net_premium())
    }

    /// Aggregated payoff curve over `window`.
    pub fn payoff(&self, window: &SamplingWindow<T>) -> Result<PayoffCurve<T>, PayoffError> {
        compute_portfolio_payoff(&self.legs, window)
    }

    /// Aggregated payoff at a single spot price.
    pub fn payoff_at(&self, spot: T) -> T {
        self.legs
            .iter()
            .fold(T::zero(), |acc, leg| acc + leg.payoff_at(spot))
    }
}

impl<T: Float> TryFrom<Vec<Contract<T>>> for Portfolio<T> {
    type Error = PayoffError;

    fn try_from(legs: Vec<Contract<T>>) -> Result<Self, Self::Error> {
        Self::new(legs)
    }
}

impl<T: Float> From<Portfolio<T>> for Vec<Contract<T>> {
    fn from(portfolio: Portfolio<T>) -> Self {
        portfolio.legs
    }
}
