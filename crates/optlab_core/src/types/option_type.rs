//! Option type and transaction direction.
//!
//! Both are closed two-value enumerations. String input is parsed once,
//! at construction, so downstream code never re-checks raw labels.

use num_traits::Float;
use std::fmt;
use std::str::FromStr;

use super::error::PayoffError;

/// Type of option contract.
///
/// # Variants
/// - `Call`: right to buy the underlying at the strike
/// - `Put`: right to sell the underlying at the strike
///
/// # Examples
/// ```
/// use optlab_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert!("Straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum OptionType {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl OptionType {
    /// Holder's payoff per unit at expiry, net of the premium paid.
    ///
    /// - Call: `max(S - K - P, -P)`
    /// - Put: `max(K - S - P, -P)`
    ///
    /// The loss is capped at the premium; the upside is unbounded for a call
    /// and bounded by `K - P` for a put.
    ///
    /// # Examples
    /// ```
    /// use optlab_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.long_payoff(110.0_f64, 102.0, 2.0), 6.0);
    /// assert_eq!(OptionType::Call.long_payoff(100.0_f64, 102.0, 2.0), -2.0);
    /// assert_eq!(OptionType::Put.long_payoff(90.0_f64, 100.0, 3.0), 7.0);
    /// ```
    #[inline]
    pub fn long_payoff<T: Float>(&self, spot: T, strike: T, premium: T) -> T {
        let intrinsic_net = match self {
            OptionType::Call => spot - strike - premium,
            OptionType::Put => strike - spot - premium,
        };
        intrinsic_net.max(-premium)
    }

    /// Canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PayoffError::invalid_contract("option_type", s)),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PayoffError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Transaction direction of a leg.
///
/// `Buy` is the long (holder) side, `Sell` the short (writer) side. The
/// writer's payoff is the exact negation of the holder's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum Direction {
    /// Long position (option holder)
    Buy,
    /// Short position (option writer)
    Sell,
}

impl Direction {
    /// Sign applied to the holder's payoff: `+1` for Buy, `-1` for Sell.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            Direction::Buy => T::one(),
            Direction::Sell => -T::one(),
        }
    }

    /// The other side of the trade.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }

    /// Returns whether this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Direction::Buy)
    }

    /// Returns whether this is a short position.
    #[inline]
    pub fn is_short(&self) -> bool {
        matches!(self, Direction::Sell)
    }

    /// Canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "long" => Ok(Direction::Buy),
            "sell" | "short" => Ok(Direction::Sell),
            _ => Err(PayoffError::invalid_contract("direction", s)),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = PayoffError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
