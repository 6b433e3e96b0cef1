//! Summary statistics over a payoff curve.
//!
//! Extracts the figures a trader reads off a payoff diagram: the best and
//! worst outcomes inside the sampled window and the break-even spots.

use num_traits::Float;
use optlab_core::PayoffCurve;

/// Key figures of a payoff curve within its sampling window.
///
/// Extremes are window-bounded: an unbounded profile (e.g. a long call)
/// reports the value at the window edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveSummary<T: Float> {
    /// Highest payoff in the window
    pub max_profit: T,
    /// Spot at which `max_profit` first occurs
    pub max_profit_spot: T,
    /// Lowest payoff in the window
    pub max_loss: T,
    /// Spot at which `max_loss` first occurs
    pub max_loss_spot: T,
    /// Spots where the payoff crosses or touches zero, ascending
    pub breakevens: Vec<T>,
}

impl<T: Float> CurveSummary<T> {
    /// Summarises `curve`; `None` for an empty curve.
    ///
    /// Break-evens between two samples of opposite sign are located by linear
    /// interpolation. A run of consecutive zero samples contributes its first
    /// spot only.
    ///
    /// # Examples
    /// ```
    /// use optlab_core::PayoffCurve;
    /// use optlab_engine::CurveSummary;
    ///
    /// let curve = PayoffCurve::new(vec![90.0_f64, 100.0, 110.0], vec![-2.0, -2.0, 6.0]).unwrap();
    /// let summary = CurveSummary::from_curve(&curve).unwrap();
    ///
    /// assert_eq!(summary.max_profit, 6.0);
    /// assert_eq!(summary.max_loss, -2.0);
    /// assert_eq!(summary.breakevens, vec![102.5]);
    /// ```
    pub fn from_curve(curve: &PayoffCurve<T>) -> Option<Self> {
        let (first_spot, first_payoff) = curve.get(0)?;

        let mut max_profit = first_payoff;
        let mut max_profit_spot = first_spot;
        let mut max_loss = first_payoff;
        let mut max_loss_spot = first_spot;

        for (spot, payoff) in curve.iter().skip(1) {
            if payoff > max_profit {
                max_profit = payoff;
                max_profit_spot = spot;
            }
            if payoff < max_loss {
                max_loss = payoff;
                max_loss_spot = spot;
            }
        }

        Some(Self {
            max_profit,
            max_profit_spot,
            max_loss,
            max_loss_spot,
            breakevens: breakevens(curve),
        })
    }

    /// Ratio of best to worst outcome, `None` when the worst outcome is not
    /// a loss.
    pub fn reward_to_risk(&self) -> Option<T> {
        if self.max_loss < T::zero() {
            Some(self.max_profit / -self.max_loss)
        } else {
            None
        }
    }
}

/// Spots where the payoff crosses or touches zero, ascending.
pub fn breakevens<T: Float>(curve: &PayoffCurve<T>) -> Vec<T> {
    let spots = curve.spots();
    let payoffs = curve.payoffs();
    let zero = T::zero();
    let mut found = Vec::new();

    for i in 0..payoffs.len() {
        let p = payoffs[i];
        if p == zero {
            let previous_zero = i > 0 && payoffs[i - 1] == zero;
            if !previous_zero {
                found.push(spots[i]);
            }
            continue;
        }

        if let Some(&next) = payoffs.get(i + 1) {
            if next != zero && (p < zero) != (next < zero) {
                // Linear interpolation between the bracketing samples.
                let t = p / (p - next);
                found.push(spots[i] + t * (spots[i + 1] - spots[i]));
            }
        }
    }

    found
}
