//! Multi-leg strategy presets.
//!
//! Builds the legs of common option structures from strikes and premiums:
//! - Straddle and strangle (long or short volatility)
//! - Vertical spreads: bull call, bear put
//! - Long call butterfly
//! - Iron condor
//!
//! Every builder validates strike ordering and returns ready-to-aggregate
//! [`Contract`]s in a fixed leg order.

use num_traits::Float;
use optlab_core::{Contract, Direction, OptionType, PayoffError};
use std::fmt;
use std::str::FromStr;

/// Named strategy presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    /// Call and put at the same strike
    Straddle,
    /// Out-of-the-money put and call
    Strangle,
    /// Buy lower-strike call, sell higher-strike call
    BullCallSpread,
    /// Buy higher-strike put, sell lower-strike put
    BearPutSpread,
    /// Buy low call, sell two mid calls, buy high call
    Butterfly,
    /// Buy low put, sell put, sell call, buy high call
    IronCondor,
}

impl StrategyKind {
    /// All presets, in display order.
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Straddle,
        StrategyKind::Strangle,
        StrategyKind::BullCallSpread,
        StrategyKind::BearPutSpread,
        StrategyKind::Butterfly,
        StrategyKind::IronCondor,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Straddle => "straddle",
            StrategyKind::Strangle => "strangle",
            StrategyKind::BullCallSpread => "bull-call-spread",
            StrategyKind::BearPutSpread => "bear-put-spread",
            StrategyKind::Butterfly => "butterfly",
            StrategyKind::IronCondor => "iron-condor",
        }
    }

    /// Number of strikes the preset takes.
    pub fn strike_count(&self) -> usize {
        match self {
            StrategyKind::Straddle => 1,
            StrategyKind::Strangle
            | StrategyKind::BullCallSpread
            | StrategyKind::BearPutSpread => 2,
            StrategyKind::Butterfly => 3,
            StrategyKind::IronCondor => 4,
        }
    }

    /// Number of premiums the preset takes.
    pub fn premium_count(&self) -> usize {
        match self {
            StrategyKind::Straddle => 2,
            other => other.strike_count(),
        }
    }

    /// Builds the legs of this preset.
    ///
    /// `strikes` are ascending, except for the straddle's single strike.
    /// `premiums` follow the leg order documented on each builder function.
    /// A `Sell` direction mirrors every leg of the structure as named.
    ///
    /// # Errors
    /// `PayoffError::InvalidStrategy` for a wrong number of strikes or
    /// premiums or for inconsistent strikes; `PayoffError::InvalidContract`
    /// for an invalid leg.
    ///
    /// # Examples
    /// ```
    /// use optlab_core::Direction;
    /// use optlab_engine::StrategyKind;
    ///
    /// let legs = StrategyKind::IronCondor
    ///     .build(&[90.0_f64, 95.0, 105.0, 110.0], &[0.5, 1.5, 1.5, 0.5], Direction::Buy, 1)
    ///     .unwrap();
    /// assert_eq!(legs.len(), 4);
    /// ```
    pub fn build<T: Float>(
        &self,
        strikes: &[T],
        premiums: &[T],
        direction: Direction,
        quantity: u32,
    ) -> Result<Vec<Contract<T>>, PayoffError> {
        if strikes.len() != self.strike_count() {
            return Err(PayoffError::invalid_strategy(format!(
                "{} takes {} strike(s), got {}",
                self.name(),
                self.strike_count(),
                strikes.len()
            )));
        }
        if premiums.len() != self.premium_count() {
            return Err(PayoffError::invalid_strategy(format!(
                "{} takes {} premium(s), got {}",
                self.name(),
                self.premium_count(),
                premiums.len()
            )));
        }

        let legs = match self {
            StrategyKind::Straddle => {
                return straddle(strikes[0], premiums[0], premiums[1], direction, quantity)
            }
            StrategyKind::Strangle => {
                return strangle(
                    strikes[0], strikes[1], premiums[0], premiums[1], direction, quantity,
                )
            }
            StrategyKind::BullCallSpread => {
                bull_call_spread(strikes[0], strikes[1], premiums[0], premiums[1], quantity)?
            }
            StrategyKind::BearPutSpread => {
                bear_put_spread(strikes[0], strikes[1], premiums[0], premiums[1], quantity)?
            }
            StrategyKind::Butterfly => long_call_butterfly(
                [strikes[0], strikes[1], strikes[2]],
                [premiums[0], premiums[1], premiums[2]],
                quantity,
            )?,
            StrategyKind::IronCondor => iron_condor(
                [strikes[0], strikes[1], strikes[2], strikes[3]],
                [premiums[0], premiums[1], premiums[2], premiums[3]],
                quantity,
            )?,
        };

        Ok(match direction {
            Direction::Buy => legs,
            Direction::Sell => mirror(legs),
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalised)
            .ok_or_else(|| {
                PayoffError::invalid_strategy(format!("unknown strategy '{}'", s))
            })
    }
}

/// Call and put on the same strike, both bought or both sold.
///
/// Leg order: call, put.
pub fn straddle<T: Float>(
    strike: T,
    call_premium: T,
    put_premium: T,
    direction: Direction,
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    Ok(vec![
        Contract::new(OptionType::Call, strike, direction, call_premium, quantity)?,
        Contract::new(OptionType::Put, strike, direction, put_premium, quantity)?,
    ])
}

/// Put below and call above, both bought or both sold.
///
/// Leg order: put, call. Requires `put_strike < call_strike`.
pub fn strangle<T: Float>(
    put_strike: T,
    call_strike: T,
    put_premium: T,
    call_premium: T,
    direction: Direction,
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    ensure_ascending("strangle", &[put_strike, call_strike])?;
    Ok(vec![
        Contract::new(OptionType::Put, put_strike, direction, put_premium, quantity)?,
        Contract::new(OptionType::Call, call_strike, direction, call_premium, quantity)?,
    ])
}

/// Debit call spread: buy the lower strike, sell the higher strike.
///
/// Leg order: long call, short call.
pub fn bull_call_spread<T: Float>(
    low_strike: T,
    high_strike: T,
    low_premium: T,
    high_premium: T,
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    ensure_ascending("bull call spread", &[low_strike, high_strike])?;
    Ok(vec![
        Contract::new(OptionType::Call, low_strike, Direction::Buy, low_premium, quantity)?,
        Contract::new(OptionType::Call, high_strike, Direction::Sell, high_premium, quantity)?,
    ])
}

/// Debit put spread: buy the higher strike, sell the lower strike.
///
/// Leg order: short put (low strike), long put (high strike).
pub fn bear_put_spread<T: Float>(
    low_strike: T,
    high_strike: T,
    low_premium: T,
    high_premium: T,
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    ensure_ascending("bear put spread", &[low_strike, high_strike])?;
    Ok(vec![
        Contract::new(OptionType::Put, low_strike, Direction::Sell, low_premium, quantity)?,
        Contract::new(OptionType::Put, high_strike, Direction::Buy, high_premium, quantity)?,
    ])
}

/// Long call butterfly: buy one low, sell two mid, buy one high.
///
/// Leg order follows `strikes`. The middle leg carries twice `quantity`.
pub fn long_call_butterfly<T: Float>(
    strikes: [T; 3],
    premiums: [T; 3],
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    ensure_ascending("butterfly", &strikes)?;
    let body = quantity
        .checked_mul(2)
        .ok_or_else(|| PayoffError::invalid_contract("quantity", quantity))?;
    Ok(vec![
        Contract::new(OptionType::Call, strikes[0], Direction::Buy, premiums[0], quantity)?,
        Contract::new(OptionType::Call, strikes[1], Direction::Sell, premiums[1], body)?,
        Contract::new(OptionType::Call, strikes[2], Direction::Buy, premiums[2], quantity)?,
    ])
}

/// Credit iron condor: long put wing, short put, short call, long call wing.
///
/// Leg order follows `strikes`, which must be strictly ascending.
pub fn iron_condor<T: Float>(
    strikes: [T; 4],
    premiums: [T; 4],
    quantity: u32,
) -> Result<Vec<Contract<T>>, PayoffError> {
    ensure_ascending("iron condor", &strikes)?;
    Ok(vec![
        Contract::new(OptionType::Put, strikes[0], Direction::Buy, premiums[0], quantity)?,
        Contract::new(OptionType::Put, strikes[1], Direction::Sell, premiums[1], quantity)?,
        Contract::new(OptionType::Call, strikes[2], Direction::Sell, premiums[2], quantity)?,
        Contract::new(OptionType::Call, strikes[3], Direction::Buy, premiums[3], quantity)?,
    ])
}

/// Flips every leg to the other side of the trade.
pub fn mirror<T: Float>(legs: Vec<Contract<T>>) -> Vec<Contract<T>> {
    legs.into_iter()
        .map(|leg| {
            let opposite = leg.direction().opposite();
            leg.with_direction(opposite)
        })
        .collect()
}

fn ensure_ascending<T: Float>(name: &str, strikes: &[T]) -> Result<(), PayoffError> {
    if strikes.windows(2).all(|w| w[0] < w[1]) {
        Ok(())
    } else {
        let rendered: Vec<String> = strikes
            .iter()
            .map(|k| k.to_f64().map_or_else(|| "NaN".to_string(), |v| v.to_string()))
            .collect();
        Err(PayoffError::invalid_strategy(format!(
            "{} strikes must be strictly ascending, got [{}]",
            name,
            rendered.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn payoff_at(legs: &[Contract<f64>], spot: f64) -> f64 {
        legs.iter().map(|leg| leg.payoff_at(spot)).sum()
    }

    #[test]
    fn test_long_straddle_payoff() {
        let legs = straddle(100.0, 3.0, 2.0, Direction::Buy, 1).unwrap();
        assert_eq!(legs.len(), 2);
        assert_relative_eq!(payoff_at(&legs, 100.0), -5.0);
        assert_relative_eq!(payoff_at(&legs, 95.0), 0.0);
        assert_relative_eq!(payoff_at(&legs, 105.0), 0.0);
    }

    #[test]
    fn test_short_strangle_credit() {
        let legs = strangle(95.0, 105.0, 1.0, 1.2, Direction::Sell, 1).unwrap();
        assert_relative_eq!(payoff_at(&legs, 100.0), 2.2, epsilon = 1e-12);
        assert!(legs.iter().all(|leg| leg.direction().is_short()));
    }

    #[test]
    fn test_strangle_rejects_inverted_strikes() {
        let result = strangle(105.0_f64, 95.0, 1.0, 1.0, Direction::Buy, 1);
        assert!(matches!(result, Err(PayoffError::InvalidStrategy { .. })));
    }

    #[test]
    fn test_bull_call_spread_bounds() {
        let legs = bull_call_spread(100.0, 110.0, 5.0, 2.0, 1).unwrap();
        assert_relative_eq!(payoff_at(&legs, 90.0), -3.0);
        assert_relative_eq!(payoff_at(&legs, 120.0), 7.0);
    }

    #[test]
    fn test_bear_put_spread_bounds() {
        let legs = bear_put_spread(90.0, 100.0, 1.0, 4.0, 1).unwrap();
        assert_relative_eq!(payoff_at(&legs, 110.0), -3.0);
        assert_relative_eq!(payoff_at(&legs, 80.0), 7.0);
    }

    #[test]
    fn test_butterfly_peak_at_body() {
        let legs = long_call_butterfly([95.0, 100.0, 105.0], [6.0, 3.0, 1.0], 1).unwrap();
        assert_eq!(legs[1].quantity(), 2);
        // Net debit = 6 - 2*3 + 1 = 1
        assert_relative_eq!(payoff_at(&legs, 90.0), -1.0);
        assert_relative_eq!(payoff_at(&legs, 100.0), 4.0);
        assert_relative_eq!(payoff_at(&legs, 110.0), -1.0);
    }

    #[test]
    fn test_butterfly_quantity_overflow() {
        let result = long_call_butterfly([95.0_f64, 100.0, 105.0], [1.0, 1.0, 1.0], u32::MAX);
        assert!(matches!(result, Err(PayoffError::InvalidContract { .. })));
    }

    #[test]
    fn test_iron_condor_profile() {
        let legs = iron_condor([90.0, 95.0, 105.0, 110.0], [0.5, 1.5, 1.5, 0.5], 1).unwrap();
        // Net credit = 2.0, wings 5 wide
        assert_relative_eq!(payoff_at(&legs, 100.0), 2.0);
        assert_relative_eq!(payoff_at(&legs, 80.0), -3.0);
        assert_relative_eq!(payoff_at(&legs, 120.0), -3.0);
    }

    #[test]
    fn test_iron_condor_rejects_unsorted() {
        let result = iron_condor([90.0_f64, 105.0, 95.0, 110.0], [1.0; 4], 1);
        match result {
            Err(PayoffError::InvalidStrategy { message }) => {
                assert!(message.contains("iron condor"));
            }
            other => panic!("Expected InvalidStrategy, got {:?}", other),
        }
    }

    #[test]
    fn test_build_sell_mirrors_structure() {
        let bought = StrategyKind::BullCallSpread
            .build(&[100.0, 110.0], &[5.0, 2.0], Direction::Buy, 1)
            .unwrap();
        let sold = StrategyKind::BullCallSpread
            .build(&[100.0, 110.0], &[5.0, 2.0], Direction::Sell, 1)
            .unwrap();
        for spot in [90.0, 105.0, 120.0] {
            assert_relative_eq!(payoff_at(&sold, spot), -payoff_at(&bought, spot));
        }
    }

    #[test]
    fn test_build_straddle_direction_passthrough() {
        let legs = StrategyKind::Straddle
            .build(&[100.0], &[3.0, 2.0], Direction::Sell, 2)
            .unwrap();
        assert!(legs.iter().all(|leg| leg.direction().is_short()));
        assert!(legs.iter().all(|leg| leg.quantity() == 2));
    }

    #[test]
    fn test_build_rejects_wrong_arity() {
        let result = StrategyKind::Butterfly.build(&[95.0_f64, 100.0], &[1.0, 1.0], Direction::Buy, 1);
        match result {
            Err(PayoffError::InvalidStrategy { message }) => {
                assert!(message.contains("3 strike(s)"));
            }
            other => panic!("Expected InvalidStrategy, got {:?}", other),
        }

        let result = StrategyKind::Straddle.build(&[100.0_f64], &[1.0], Direction::Buy, 1);
        assert!(matches!(result, Err(PayoffError::InvalidStrategy { .. })));
    }

    #[test]
    fn test_strategy_kind_parse() {
        assert_eq!(
            "bull_call_spread".parse::<StrategyKind>().unwrap(),
            StrategyKind::BullCallSpread
        );
        assert_eq!(
            "Iron-Condor".parse::<StrategyKind>().unwrap(),
            StrategyKind::IronCondor
        );
        assert!("collar".parse::<StrategyKind>().is_err());
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}
