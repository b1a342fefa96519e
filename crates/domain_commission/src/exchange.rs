//! Exchange strategies
//!
//! The calculator never sources exchange rates itself. It calls an
//! [`Exchanger`] supplied by the caller with the currency the running amount
//! is in, the currency it must be converted to, and the amount. Any closure
//! of the shape `Fn(Currency, Currency, Money) -> Result<Exchanged, ExchangeError>`
//! is an exchanger, so the three-argument contract is enforced by the
//! compiler.
//!
//! Two strategies ship with the crate:
//! - [`IdentityExchanger`]: 1:1 conversion, the default
//! - [`FixedRateExchanger`]: a static rate table, usually built from configuration

use std::collections::HashMap;

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CommissionError;

/// Result of a single currency conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchanged {
    /// Converted amount, denominated in the target currency
    pub amount: Money,
    /// Rate applied (target units per source unit)
    pub rate: Decimal,
}

impl Exchanged {
    pub fn new(amount: Money, rate: Decimal) -> Self {
        Self { amount, rate }
    }
}

/// Errors raised by exchange strategies
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExchangeError {
    /// No rate is known for the pair
    #[error("Exchange rate unavailable: {from} -> {to}")]
    RateUnavailable {
        from: Currency,
        to: Currency,
    },

    /// Failure reported by an external rate provider
    #[error("Exchange provider error: {0}")]
    Provider(String),
}

/// Converts an amount from one currency into another
pub trait Exchanger: Send + Sync {
    /// Converts `amount` (denominated in `from`) into `to`
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError`] if the conversion cannot be performed. The
    /// calculator passes the error through to its caller unchanged.
    fn exchange(
        &self,
        from: Currency,
        to: Currency,
        amount: Money,
    ) -> Result<Exchanged, ExchangeError>;
}

impl<F> Exchanger for F
where
    F: Fn(Currency, Currency, Money) -> Result<Exchanged, ExchangeError> + Send + Sync,
{
    fn exchange(
        &self,
        from: Currency,
        to: Currency,
        amount: Money,
    ) -> Result<Exchanged, ExchangeError> {
        self(from, to, amount)
    }
}

/// Converts 1:1 by re-labelling the amount in the target currency
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExchanger;

impl Exchanger for IdentityExchanger {
    fn exchange(
        &self,
        _from: Currency,
        to: Currency,
        amount: Money,
    ) -> Result<Exchanged, ExchangeError> {
        Ok(Exchanged::new(Money::new(amount.amount(), to), dec!(1)))
    }
}

/// One entry of a fixed rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRate {
    pub from: Currency,
    pub to: Currency,
    /// Units of `to` per unit of `from`
    pub rate: Decimal,
}

impl FixedRate {
    pub fn new(from: Currency, to: Currency, rate: Decimal) -> Self {
        Self { from, to, rate }
    }
}

/// Exchanger backed by a static table of rates
///
/// When only one direction of a pair is configured, the other direction uses
/// the reciprocal rate.
#[derive(Debug, Clone, Default)]
pub struct FixedRateExchanger {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl FixedRateExchanger {
    /// Builds the table, rejecting rates that cannot produce a conversion
    ///
    /// # Errors
    ///
    /// Returns [`CommissionError::InvalidExchangeStrategy`] if a rate is not
    /// positive, maps a currency onto itself, or a pair is listed twice.
    pub fn new(rates: impl IntoIterator<Item = FixedRate>) -> Result<Self, CommissionError> {
        let mut table = HashMap::new();

        for entry in rates {
            if entry.from == entry.to {
                return Err(CommissionError::InvalidExchangeStrategy(format!(
                    "rate for {} -> {} maps a currency onto itself",
                    entry.from, entry.to
                )));
            }
            if entry.rate <= Decimal::ZERO {
                return Err(CommissionError::InvalidExchangeStrategy(format!(
                    "rate for {} -> {} must be positive, got {}",
                    entry.from, entry.to, entry.rate
                )));
            }
            if table.insert((entry.from, entry.to), entry.rate).is_some() {
                return Err(CommissionError::InvalidExchangeStrategy(format!(
                    "rate for {} -> {} is listed more than once",
                    entry.from, entry.to
                )));
            }
        }

        Ok(Self { rates: table })
    }

    /// Looks up the rate for a pair, falling back to the reciprocal
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        self.rates
            .get(&(from, to))
            .copied()
            .or_else(|| {
                self.rates
                    .get(&(to, from))
                    .and_then(|inverse| Decimal::ONE.checked_div(*inverse))
            })
    }
}

impl Exchanger for FixedRateExchanger {
    fn exchange(
        &self,
        from: Currency,
        to: Currency,
        amount: Money,
    ) -> Result<Exchanged, ExchangeError> {
        let rate = self
            .rate(from, to)
            .ok_or(ExchangeError::RateUnavailable { from, to })?;
        let converted = amount
            .amount()
            .checked_mul(rate)
            .ok_or_else(|| {
                ExchangeError::Provider(format!("overflow converting {} to {}", amount, to))
            })?;

        Ok(Exchanged::new(Money::new(converted, to), rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FixedRateExchanger {
        FixedRateExchanger::new([
            FixedRate::new(Currency::EUR, Currency::USD, dec!(1.25)),
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_relabels_amount() {
        let out = IdentityExchanger
            .exchange(Currency::EUR, Currency::USD, Money::new(dec!(95), Currency::EUR))
            .unwrap();
        assert_eq!(out.amount, Money::new(dec!(95), Currency::USD));
        assert_eq!(out.rate, dec!(1));
    }

    #[test]
    fn test_closure_is_an_exchanger() {
        let halve =
            |_from: Currency, to: Currency, amount: Money| -> Result<Exchanged, ExchangeError> {
                Ok(Exchanged::new(Money::new(amount.amount() / dec!(2), to), dec!(0.5)))
            };
        let out = halve
            .exchange(Currency::USD, Currency::GBP, Money::new(dec!(10), Currency::USD))
            .unwrap();
        assert_eq!(out.amount, Money::new(dec!(5), Currency::GBP));
    }

    #[test]
    fn test_fixed_rate_forward() {
        let out = table()
            .exchange(Currency::EUR, Currency::USD, Money::new(dec!(100), Currency::EUR))
            .unwrap();
        assert_eq!(out.amount, Money::new(dec!(125), Currency::USD));
        assert_eq!(out.rate, dec!(1.25));
    }

    #[test]
    fn test_fixed_rate_uses_reciprocal() {
        let out = table()
            .exchange(Currency::USD, Currency::EUR, Money::new(dec!(125), Currency::USD))
            .unwrap();
        assert_eq!(out.rate, dec!(0.8));
        assert_eq!(out.amount, Money::new(dec!(100), Currency::EUR));
    }

    #[test]
    fn test_fixed_rate_missing_pair() {
        let err = table()
            .exchange(Currency::GBP, Currency::JPY, Money::new(dec!(1), Currency::GBP))
            .unwrap_err();
        assert_eq!(err, ExchangeError::RateUnavailable { from: Currency::GBP, to: Currency::JPY });
    }

    #[test]
    fn test_fixed_rate_rejects_non_positive() {
        let err = FixedRateExchanger::new([FixedRate::new(Currency::EUR, Currency::USD, dec!(0))])
            .unwrap_err();
        assert!(matches!(err, CommissionError::InvalidExchangeStrategy(_)));
    }

    #[test]
    fn test_fixed_rate_rejects_duplicates_and_self_pairs() {
        let duplicate = FixedRateExchanger::new([
            FixedRate::new(Currency::EUR, Currency::USD, dec!(1.1)),
            FixedRate::new(Currency::EUR, Currency::USD, dec!(1.2)),
        ]);
        assert!(matches!(duplicate, Err(CommissionError::InvalidExchangeStrategy(_))));

        let self_pair =
            FixedRateExchanger::new([FixedRate::new(Currency::EUR, Currency::EUR, dec!(1))]);
        assert!(matches!(self_pair, Err(CommissionError::InvalidExchangeStrategy(_))));
    }
}
