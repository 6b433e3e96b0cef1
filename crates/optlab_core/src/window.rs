//! Spot-price sampling window.
//!
//! The window describes the scenario grid every leg of a position is
//! evaluated on: `[spot * (1 - range/100), spot * (1 + range/100)]`,
//! sampled every `step` percent of spot.

use num_traits::Float;

use crate::types::PayoffError;

/// Default sampling granularity, in percent of spot (0.01% of spot).
pub const DEFAULT_STEP_PCT: f64 = 0.01;

/// Upper bound on the number of samples a window may produce.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Absorbs floating-point error when counting whole steps, so that
/// `20.0 / 0.01` counts as 2000 steps rather than 1999.
const STEP_TOLERANCE: f64 = 1e-9;

/// Shared spot-price sampling parameters.
///
/// # Examples
/// ```
/// use optlab_core::SamplingWindow;
///
/// let window = SamplingWindow::new(100.0_f64, 10.0).unwrap();
/// assert_eq!(window.len(), 2001);
/// assert!((window.lower() - 90.0).abs() < 1e-12);
/// assert!((window.upper() - 110.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SamplingWindow<T: Float> {
    spot: T,
    spot_range: T,
    step: T,
    steps: usize,
}

impl<T: Float> SamplingWindow<T> {
    /// Creates a window around `spot` spanning `spot_range` percent either
    /// side, sampled at the default granularity.
    ///
    /// # Errors
    /// `PayoffError::InvalidWindow` if `spot` is not a positive finite
    /// number or `spot_range` is not within `[0, 100]`.
    pub fn new(spot: T, spot_range: T) -> Result<Self, PayoffError> {
        let step = T::from(DEFAULT_STEP_PCT)
            .ok_or_else(|| PayoffError::invalid_window("default step not representable"))?;
        Self::build(spot, spot_range, step)
    }

    /// Returns a copy of this window sampled every `step` percent of spot.
    ///
    /// # Errors
    /// `PayoffError::InvalidWindow` if `step` is not a positive finite number
    /// or the resulting grid exceeds [`MAX_SAMPLES`].
    pub fn with_step(self, step: T) -> Result<Self, PayoffError> {
        Self::build(self.spot, self.spot_range, step)
    }

    fn build(spot: T, spot_range: T, step: T) -> Result<Self, PayoffError> {
        let zero = T::zero();
        let hundred = percent_base::<T>();

        if !spot.is_finite() || spot <= zero {
            return Err(PayoffError::invalid_window(format!(
                "spot must be positive and finite, got {}",
                render(spot)
            )));
        }

        if !spot_range.is_finite() || spot_range < zero || spot_range > hundred {
            return Err(PayoffError::invalid_window(format!(
                "spot_range must be within [0, 100] percent, got {}",
                render(spot_range)
            )));
        }

        if !step.is_finite() || step <= zero {
            return Err(PayoffError::invalid_window(format!(
                "step must be positive and finite, got {}",
                render(step)
            )));
        }

        let span = (spot_range + spot_range) / step;
        let tolerance = T::from(STEP_TOLERANCE).unwrap_or_else(T::epsilon);
        let steps = (span + tolerance)
            .floor()
            .to_usize()
            .filter(|&n| n < MAX_SAMPLES)
            .ok_or_else(|| {
                PayoffError::invalid_window(format!(
                    "grid of {} steps exceeds the {} sample limit",
                    render(span.floor()),
                    MAX_SAMPLES
                ))
            })?;

        Ok(Self {
            spot,
            spot_range,
            step,
            steps,
        })
    }

    /// Returns the current underlying price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the half-width of the window in percent of spot.
    #[inline]
    pub fn spot_range(&self) -> T {
        self.spot_range
    }

    /// Returns the sampling granularity in percent of spot.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of sampled spot prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false: a valid window holds at least the spot itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lowest sampled spot price.
    #[inline]
    pub fn lower(&self) -> T {
        self.sample(0)
    }

    /// Highest sampled spot price.
    #[inline]
    pub fn upper(&self) -> T {
        self.sample(self.steps)
    }

    /// Spot price at sample index `i`.
    ///
    /// Computed from the index rather than by accumulation so that error does
    /// not build up across thousands of steps.
    #[inline]
    pub fn sample(&self, i: usize) -> T {
        let hundred = percent_base::<T>();
        let offset = T::from(i).unwrap_or_else(T::zero) * self.step;
        self.spot * (hundred - self.spot_range + offset) / hundred
    }

    /// Ascending sequence of sampled spot prices.
    pub fn spot_prices(&self) -> Vec<T> {
        (0..self.len()).map(|i| self.sample(i)).collect()
    }

    /// Iterator over sampled spot prices.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| self.sample(i))
    }
}

#[inline]
fn percent_base<T: Float>() -> T {
    T::from(100.0).unwrap_or_else(T::one)
}

fn render<T: Float>(value: T) -> String {
    value
        .to_f64()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NaN".to_string())
}
