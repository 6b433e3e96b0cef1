//! Option contract (one leg of a position).
//!
//! A [`Contract`] is an immutable, validated description of a single option
//! leg: type, strike, direction, premium and quantity. The spot-price
//! sampling window is deliberately not part of the contract; it is a
//! portfolio-level parameter shared by every leg.

use num_traits::Float;

use crate::types::{Direction, OptionType, PayoffError};

/// Default number of contracts in a leg.
pub const DEFAULT_QUANTITY: u32 = 1;

/// One option leg.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use optlab_core::{Contract, Direction, OptionType};
///
/// let leg = Contract::new(OptionType::Call, 102.0_f64, Direction::Buy, 2.0, 1).unwrap();
/// assert_eq!(leg.payoff_at(110.0), 6.0);
/// assert_eq!(leg.payoff_at(100.0), -2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ContractFields<T>")
)]
pub struct Contract<T: Float> {
    option_type: OptionType,
    strike: T,
    direction: Direction,
    premium: T,
    quantity: u32,
}

impl<T: Float> Contract<T> {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `option_type` - Call or Put
    /// * `strike` - Exercise price (must be finite)
    /// * `direction` - Buy (holder) or Sell (writer)
    /// * `premium` - Price per unit paid or received (must be finite)
    /// * `quantity` - Number of contracts (must be at least 1)
    ///
    /// Strike and premium are not range-checked beyond finiteness; the
    /// payoff formulas define the behaviour for zero or negative values.
    ///
    /// # Errors
    /// `PayoffError::InvalidContract` when `quantity == 0` or a price is NaN
    /// or infinite.
    pub fn new(
        option_type: OptionType,
        strike: T,
        direction: Direction,
        premium: T,
        quantity: u32,
    ) -> Result<Self, PayoffError> {
        if !strike.is_finite() {
            return Err(PayoffError::invalid_contract("strike", render(strike)));
        }

        if !premium.is_finite() {
            return Err(PayoffError::invalid_contract("premium", render(premium)));
        }

        if quantity == 0 {
            return Err(PayoffError::invalid_contract("quantity", quantity));
        }

        Ok(Self {
            option_type,
            strike,
            direction,
            premium,
            quantity,
        })
    }

    /// Creates a contract from raw string labels.
    ///
    /// # Examples
    /// ```
    /// use optlab_core::{Contract, PayoffError};
    ///
    /// let leg = Contract::parse("Put", 95.0_f64, "Sell", 1.5, 2).unwrap();
    /// assert!(leg.direction().is_short());
    ///
    /// let err = Contract::parse("Straddle", 95.0_f64, "Buy", 1.5, 1).unwrap_err();
    /// assert!(matches!(err, PayoffError::InvalidContract { .. }));
    /// ```
    pub fn parse(
        option_type: &str,
        strike: T,
        direction: &str,
        premium: T,
        quantity: u32,
    ) -> Result<Self, PayoffError> {
        let option_type: OptionType = option_type.parse()?;
        let direction: Direction = direction.parse()?;
        Self::new(option_type, strike, direction, premium, quantity)
    }

    /// Payoff of this leg at a single spot price.
    ///
    /// Holder's payoff per unit, negated for a sold leg, scaled by quantity.
    #[inline]
    pub fn payoff_at(&self, spot: T) -> T {
        let unit = self
            .option_type
            .long_payoff(spot, self.strike, self.premium);
        unit * self.direction.sign() * self.quantity_as_float()
    }

    /// Signed premium cash flow: negative (debit) when bought,
    /// positive (credit) when sold.
    #[inline]
    pub fn net_premium(&self) -> T {
        -self.premium * self.direction.sign() * self.quantity_as_float()
    }

    /// Same contract on the other side of the trade.
    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Same contract with a different quantity.
    ///
    /// # Errors
    /// `PayoffError::InvalidContract` when `quantity == 0`.
    pub fn with_quantity(self, quantity: u32) -> Result<Self, PayoffError> {
        if quantity == 0 {
            return Err(PayoffError::invalid_contract("quantity", quantity));
        }
        Ok(Self { quantity, ..self })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the transaction direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the premium per unit.
    #[inline]
    pub fn premium(&self) -> T {
        self.premium
    }

    /// Returns the number of contracts.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    fn quantity_as_float(&self) -> T {
        T::from(self.quantity).unwrap_or_else(T::one)
    }
}

fn render<T: Float>(value: T) -> String {
    value
        .to_f64()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NaN".to_string())
}

/// Unvalidated wire form of a contract.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ContractFields<T> {
    option_type: OptionType,
    strike: T,
    direction: Direction,
    premium: T,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

#[cfg(feature = "serde")]
fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<ContractFields<T>> for Contract<T> {
    type Error = PayoffError;

    fn try_from(fields: ContractFields<T>) -> Result<Self, Self::Error> {
        Contract::new(
            fields.option_type,
            fields.strike,
            fields.direction,
            fields.premium,
            fields.quantity,
        )
    }
}
