//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the commission calculator.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::{Currency, Money};
use domain_commission::{
    CalculationParams, ExchangeError, Exchanged, Exchanger, FixedRate, FixedRateExchanger,
};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard EUR amount for testing
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a JPY amount (zero decimal places)
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }
}

/// Fixture for calculation parameters
pub struct ParamsFixtures;

impl ParamsFixtures {
    /// 100 EUR charged, USD received, 5% commission, 10% exchange commission
    pub fn charged_eur_to_usd() -> CalculationParams {
        CalculationParams::new()
            .charged(dec!(100), Currency::EUR)
            .received_currency(Currency::USD)
            .commission(dec!(5))
            .exchange_commission(dec!(10))
    }

    /// 100 USD to be received, EUR charged, 5% commission, 10% exchange commission
    pub fn received_usd_from_eur() -> CalculationParams {
        CalculationParams::new()
            .charged_currency(Currency::EUR)
            .received(dec!(100), Currency::USD)
            .commission(dec!(5))
            .exchange_commission(dec!(10))
    }

    /// 100 EUR to be received, USD charged, 1% commission
    pub fn received_eur_one_percent() -> CalculationParams {
        CalculationParams::new()
            .received(dec!(100), Currency::EUR)
            .charged_currency(Currency::USD)
            .commission(dec!(1))
    }
}

/// Fixture for exchange strategies
pub struct ExchangerFixtures;

impl ExchangerFixtures {
    /// EUR/USD at 1.25, GBP/EUR at 1.15, USD/JPY at 150
    pub fn fixed() -> FixedRateExchanger {
        FixedRateExchanger::new([
            FixedRate::new(Currency::EUR, Currency::USD, dec!(1.25)),
            FixedRate::new(Currency::GBP, Currency::EUR, dec!(1.15)),
            FixedRate::new(Currency::USD, Currency::JPY, dec!(150)),
        ])
        .expect("fixture rates are valid")
    }

    /// Exchanger whose rate source is always down
    pub fn unavailable() -> impl Exchanger + 'static {
        |from: Currency, to: Currency, _amount: Money| -> Result<Exchanged, ExchangeError> {
            Err(ExchangeError::RateUnavailable { from, to })
        }
    }

    /// Exchanger that hands the amount back in its original currency
    pub fn wrong_currency() -> impl Exchanger + 'static {
        |_from: Currency, _to: Currency, amount: Money| -> Result<Exchanged, ExchangeError> {
            Ok(Exchanged::new(amount, dec!(1)))
        }
    }
}
