//! Rounding policy for monetary amounts
//!
//! Every fee and every converted amount is rounded to the minor unit of its
//! currency as soon as it is computed. Rounding is never deferred to the end
//! of a calculation, so intermediate results compound deterministically.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::money::{Currency, Money};

/// How a decimal value is brought to a currency's precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncation)
    Down,
    /// Half away from zero
    #[default]
    HalfUp,
    /// Half to the nearest even digit (banker's rounding)
    HalfEven,
}

/// Error returned when a rounding mode name is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown rounding mode: {0}")]
pub struct ParseRoundingModeError(pub String);

impl RoundingMode {
    /// Returns the rust_decimal strategy implementing this mode
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds `value` to the decimal places of `currency`
    ///
    /// # Arguments
    ///
    /// * `value` - The exact decimal to round
    /// * `currency` - Currency whose minor unit sets the precision
    ///
    /// # Returns
    ///
    /// A Money value in `currency` with at most `currency.decimal_places()`
    /// fractional digits
    pub fn round(&self, value: Decimal, currency: Currency) -> Money {
        let rounded = value.round_dp_with_strategy(currency.decimal_places(), self.strategy());
        Money::new(rounded, currency)
    }

    /// Returns the configuration name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfEven => "half_even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "up" | "round_up" => Ok(RoundingMode::Up),
            "down" | "round_down" => Ok(RoundingMode::Down),
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_even" => Ok(RoundingMode::HalfEven),
            _ => Err(ParseRoundingModeError(s.to_string())),
        }
    }
}
