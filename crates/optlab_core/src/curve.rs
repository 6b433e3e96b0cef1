//! Payoff curve: payoff as a function of the simulated spot price.
//!
//! Stored as two parallel vectors (spots and payoffs) in ascending spot
//! order. Curves produced from the same [`SamplingWindow`](crate::SamplingWindow)
//! share an identical spot grid and can be summed pointwise.

use num_traits::Float;

use crate::types::PayoffError;

/// Ordered sequence of `(spot, payoff)` pairs.
///
/// # Examples
/// ```
/// use optlab_core::PayoffCurve;
///
/// let curve = PayoffCurve::new(vec![90.0_f64, 100.0, 110.0], vec![-2.0, -2.0, 6.0]).unwrap();
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.get(2), Some((110.0, 6.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PayoffCurve<T: Float> {
    spots: Vec<T>,
    payoffs: Vec<T>,
}

impl<T: Float> PayoffCurve<T> {
    /// Creates a curve from parallel spot and payoff vectors.
    ///
    /// # Errors
    /// `PayoffError::SamplingMismatch` if the vectors differ in length.
    pub fn new(spots: Vec<T>, payoffs: Vec<T>) -> Result<Self, PayoffError> {
        if spots.len() != payoffs.len() {
            return Err(PayoffError::SamplingMismatch {
                left: spots.len(),
                right: payoffs.len(),
            });
        }
        Ok(Self { spots, payoffs })
    }

    /// Builds a curve by evaluating `f` at every spot.
    pub fn from_fn<F>(spots: Vec<T>, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let payoffs = spots.iter().map(|&x| f(x)).collect();
        Self { spots, payoffs }
    }

    /// Curve over `spots` with every payoff equal to zero.
    pub fn zeros(spots: Vec<T>) -> Self {
        let payoffs = vec![T::zero(); spots.len()];
        Self { spots, payoffs }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns true if the curve holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Sampled spot prices, ascending.
    #[inline]
    pub fn spots(&self) -> &[T] {
        &self.spots
    }

    /// Payoff values, aligned with [`spots`](Self::spots).
    #[inline]
    pub fn payoffs(&self) -> &[T] {
        &self.payoffs
    }

    /// The `(spot, payoff)` pair at index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<(T, T)> {
        Some((*self.spots.get(i)?, *self.payoffs.get(i)?))
    }

    /// Iterator over `(spot, payoff)` pairs in ascending spot order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.spots.iter().copied().zip(self.payoffs.iter().copied())
    }

    /// Consumes the curve, returning the `(spots, payoffs)` vectors.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.spots, self.payoffs)
    }

    /// Pointwise sum of two curves sampled on the same grid.
    ///
    /// # Errors
    /// `PayoffError::SamplingMismatch` if the curves have different lengths;
    /// `PayoffError::SpotGridMismatch` if they are sampled at different spots.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PayoffError> {
        let mut sum = self.clone();
        sum.accumulate(other)?;
        Ok(sum)
    }

    /// Adds `other` into `self` pointwise.
    ///
    /// Curves built from equal [`SamplingWindow`](crate::SamplingWindow)s
    /// carry bit-identical spots, so the grids are compared exactly.
    ///
    /// # Errors
    /// `PayoffError::SamplingMismatch` if the curves have different lengths;
    /// `PayoffError::SpotGridMismatch` if any spot differs. `self` is left
    /// untouched on error.
    pub fn accumulate(&mut self, other: &Self) -> Result<(), PayoffError> {
        if self.len() != other.len() {
            return Err(PayoffError::SamplingMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if let Some(index) = self
            .spots
            .iter()
            .zip(other.spots.iter())
            .position(|(l, r)| l != r)
        {
            return Err(PayoffError::SpotGridMismatch {
                index,
                left: self.spots[index].to_f64().unwrap_or(f64::NAN),
                right: other.spots[index].to_f64().unwrap_or(f64::NAN),
            });
        }
        for (acc, &p) in self.payoffs.iter_mut().zip(other.payoffs.iter()) {
            *acc = *acc + p;
        }
        Ok(())
    }

    /// Curve with every payoff multiplied by `factor`.
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            spots: self.spots.clone(),
            payoffs: self.payoffs.iter().map(|&p| p * factor).collect(),
        }
    }

    /// Curve with every payoff negated (the other side of the trade).
    pub fn negated(&self) -> Self {
        self.scaled(-T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplingWindow;
    use approx::assert_relative_eq;

    fn sample_curve() -> PayoffCurve<f64> {
        PayoffCurve::new(vec![90.0, 100.0, 110.0], vec![-2.0, -2.0, 6.0]).unwrap()
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = PayoffCurve::new(vec![1.0_f64, 2.0], vec![0.0]);
        assert_eq!(
            result,
            Err(PayoffError::SamplingMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_iter_yields_pairs_in_order() {
        let pairs: Vec<(f64, f64)> = sample_curve().iter().collect();
        assert_eq!(pairs, vec![(90.0, -2.0), (100.0, -2.0), (110.0, 6.0)]);
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(sample_curve().get(3), None);
    }

    #[test]
    fn test_from_fn() {
        let curve = PayoffCurve::from_fn(vec![1.0_f64, 2.0, 3.0], |x| x * x);
        assert_eq!(curve.payoffs(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_checked_add_pointwise() {
        let a = sample_curve();
        let b = sample_curve().negated();
        let sum = a.checked_add(&b).unwrap();
        for &p in sum.payoffs() {
            assert_relative_eq!(p, 0.0);
        }
        assert_eq!(sum.spots(), a.spots());
    }

    #[test]
    fn test_accumulate_mismatch_leaves_self_untouched() {
        let mut a = sample_curve();
        let b = PayoffCurve::zeros(vec![90.0, 100.0]);
        assert!(a.accumulate(&b).is_err());
        assert_eq!(a, sample_curve());
    }

    #[test]
    fn test_accumulate_rejects_different_grid_of_equal_length() {
        let spots_100 = SamplingWindow::new(100.0_f64, 10.0).unwrap().spot_prices();
        let spots_200 = SamplingWindow::new(200.0_f64, 10.0).unwrap().spot_prices();
        assert_eq!(spots_100.len(), spots_200.len());

        let mut base = PayoffCurve::zeros(spots_100);
        let other = PayoffCurve::from_fn(spots_200, |x| x);
        let before = base.clone();

        match base.checked_add(&other) {
            Err(PayoffError::SpotGridMismatch { index, left, right }) => {
                assert_eq!(index, 0);
                assert_relative_eq!(left, 90.0, epsilon = 1e-10);
                assert_relative_eq!(right, 180.0, epsilon = 1e-10);
            }
            other => panic!("Expected SpotGridMismatch, got {:?}", other),
        }
        assert!(base.accumulate(&other).is_err());
        assert_eq!(base, before);
    }

    #[test]
    fn test_accumulate_same_window_succeeds() {
        let window = SamplingWindow::new(100.0_f64, 1.0).unwrap();
        let mut a = PayoffCurve::from_fn(window.spot_prices(), |x| x);
        let b = PayoffCurve::from_fn(window.spot_prices(), |x| -x);
        a.accumulate(&b).unwrap();
        assert!(a.payoffs().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_scaled() {
        let curve = sample_curve().scaled(3.0);
        assert_eq!(curve.payoffs(), &[-6.0, -6.0, 18.0]);
    }

    #[test]
    fn test_into_parts() {
        let (spots, payoffs) = sample_curve().into_parts();
        assert_eq!(spots.len(), 3);
        assert_eq!(payoffs[2], 6.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_curve_serializes_as_parallel_arrays() {
        let json = serde_json::to_string(&sample_curve()).unwrap();
        assert_eq!(
            json,
            r#"{"spots":[90.0,100.0,110.0],"payoffs":[-2.0,-2.0,6.0]}"#
        );
    }
}
