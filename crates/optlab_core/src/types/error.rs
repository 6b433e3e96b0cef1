//! Error types for payoff computation.
//!
//! A single error enum covers contract construction, sampling window
//! validation and curve aggregation so that the engine layer can propagate
//! failures with `?` without conversion boilerplate.

use thiserror::Error;

/// Payoff-related errors.
///
/// # Variants
/// - `InvalidContract`: a contract field holds a value outside its domain
/// - `EmptyPortfolio`: multi-leg aggregation was asked to sum zero legs
/// - `InvalidWindow`: the spot-price sampling window cannot be sampled
/// - `SamplingMismatch`: two curves of different length were combined
/// - `SpotGridMismatch`: two curves of equal length but different spot grids
///   were combined
/// - `InvalidStrategy`: a strategy preset received inconsistent strikes
///
/// # Examples
/// ```
/// use optlab_core::types::PayoffError;
///
/// let err = PayoffError::invalid_contract("option_type", "Straddle");
/// assert!(format!("{}", err).contains("Straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// A contract field is outside its valid domain.
    #[error("Invalid contract: {field} = '{value}'")]
    InvalidContract {
        /// Name of the offending field
        field: &'static str,
        /// Rendered value that was rejected
        value: String,
    },

    /// Multi-leg aggregation invoked with no legs.
    #[error("Empty portfolio: at least one leg is required")]
    EmptyPortfolio,

    /// The sampling window parameters are invalid.
    #[error("Invalid sampling window: {message}")]
    InvalidWindow {
        /// Description of the window error
        message: String,
    },

    /// Two curves were sampled on grids of different length.
    #[error("Sampling mismatch: {left} samples vs {right} samples")]
    SamplingMismatch {
        /// Sample count of the left-hand curve
        left: usize,
        /// Sample count of the right-hand curve
        right: usize,
    },

    /// Two curves of equal length were sampled at different spot prices.
    #[error("Spot grid mismatch at sample {index}: {left} vs {right}")]
    SpotGridMismatch {
        /// First sample index at which the grids differ
        index: usize,
        /// Spot price of the left-hand curve at `index`
        left: f64,
        /// Spot price of the right-hand curve at `index`
        right: f64,
    },

    /// A strategy preset received inconsistent parameters.
    #[error("Invalid strategy: {message}")]
    InvalidStrategy {
        /// Description of the strategy error
        message: String,
    },
}

impl PayoffError {
    /// Create an invalid contract error for `field`.
    pub fn invalid_contract(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidContract {
            field,
            value: value.to_string(),
        }
    }

    /// Create an invalid window error.
    pub fn invalid_window(message: impl Into<String>) -> Self {
        Self::InvalidWindow {
            message: message.into(),
        }
    }

    /// Create an invalid strategy error.
    pub fn invalid_strategy(message: impl Into<String>) -> Self {
        Self::InvalidStrategy {
            message: message.into(),
        }
    }
}
