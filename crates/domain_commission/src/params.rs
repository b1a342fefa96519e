//! Calculation parameters
//!
//! Mirrors the loosely shaped request a payment flow usually has at hand:
//! each side may carry a full Money value, a bare decimal plus a currency
//! code, or only a currency code.

use core_kernel::{Currency, Money, RoundingMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A complete Money value; its currency wins over any separate code
    Money(Money),
    /// A bare decimal, paired with the side's currency code
    Value(Decimal),
}

impl From<Money> for AmountInput {
    fn from(money: Money) -> Self {
        AmountInput::Money(money)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Value(value)
    }
}

/// Inputs of a single calculation
///
/// Exactly one side must end up non-zero; see
/// [`Calculator::calculate`](crate::Calculator::calculate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationParams {
    pub charged_amount: Option<AmountInput>,
    pub charged_currency: Option<Currency>,
    pub received_amount: Option<AmountInput>,
    pub received_currency: Option<Currency>,
    /// Commission percentage, zero when absent
    pub commission: Option<Decimal>,
    /// Exchange commission percentage, zero when absent
    pub exchange_commission: Option<Decimal>,
}

impl CalculationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the charged side from a decimal and currency
    pub fn charged(mut self, amount: Decimal, currency: Currency) -> Self {
        self.charged_amount = Some(AmountInput::Value(amount));
        self.charged_currency = Some(currency);
        self
    }

    /// Sets the charged side from a Money value
    pub fn charged_money(mut self, amount: Money) -> Self {
        self.charged_amount = Some(AmountInput::Money(amount));
        self
    }

    /// Sets only the charged currency (the side to compute)
    pub fn charged_currency(mut self, currency: Currency) -> Self {
        self.charged_currency = Some(currency);
        self
    }

    /// Sets the received side from a decimal and currency
    pub fn received(mut self, amount: Decimal, currency: Currency) -> Self {
        self.received_amount = Some(AmountInput::Value(amount));
        self.received_currency = Some(currency);
        self
    }

    /// Sets the received side from a Money value
    pub fn received_money(mut self, amount: Money) -> Self {
        self.received_amount = Some(AmountInput::Money(amount));
        self
    }

    /// Sets only the received currency (the side to compute)
    pub fn received_currency(mut self, currency: Currency) -> Self {
        self.received_currency = Some(currency);
        self
    }

    pub fn commission(mut self, percentage: Decimal) -> Self {
        self.commission = Some(percentage);
        self
    }

    pub fn exchange_commission(mut self, percentage: Decimal) -> Self {
        self.exchange_commission = Some(percentage);
        self
    }

    /// Normalized charged side, if it can be determined
    ///
    /// A bare decimal is rounded to the currency's minor unit under `mode`.
    pub fn charged_side(&self, mode: RoundingMode) -> Option<Money> {
        normalize(self.charged_amount, self.charged_currency, mode)
    }

    /// Normalized received side, if it can be determined
    ///
    /// A bare decimal is rounded to the currency's minor unit under `mode`.
    pub fn received_side(&self, mode: RoundingMode) -> Option<Money> {
        normalize(self.received_amount, self.received_currency, mode)
    }
}

/// Turns a raw amount/currency pair into Money
///
/// A Money value passes through, a decimal needs a currency and is rounded
/// into it, and a missing amount with a currency means zero in that currency.
fn normalize(
    amount: Option<AmountInput>,
    currency: Option<Currency>,
    mode: RoundingMode,
) -> Option<Money> {
    match (amount, currency) {
        (Some(AmountInput::Money(money)), _) => Some(money),
        (Some(AmountInput::Value(value)), Some(currency)) => Some(mode.round(value, currency)),
        (None, Some(currency)) => Some(Money::zero(currency)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_passes_through() {
        let params = CalculationParams::new()
            .charged_money(Money::new(dec!(10), Currency::EUR))
            .charged_currency(Currency::USD);
        assert_eq!(
            params.charged_side(RoundingMode::HalfUp),
            Some(Money::new(dec!(10), Currency::EUR))
        );
    }

    #[test]
    fn test_value_needs_currency() {
        let params = CalculationParams {
            charged_amount: Some(AmountInput::Value(dec!(10))),
            ..Default::default()
        };
        assert_eq!(params.charged_side(RoundingMode::HalfUp), None);
    }

    #[test]
    fn test_value_is_rounded_into_currency() {
        let params = CalculationParams::new().charged(dec!(10.005), Currency::EUR);
        assert_eq!(
            params.charged_side(RoundingMode::HalfUp),
            Some(Money::new(dec!(10.01), Currency::EUR))
        );
        assert_eq!(
            params.charged_side(RoundingMode::Down),
            Some(Money::new(dec!(10.00), Currency::EUR))
        );

        let yen = CalculationParams::new().received(dec!(1500.4), Currency::JPY);
        assert_eq!(
            yen.received_side(RoundingMode::HalfUp),
            Some(Money::new(dec!(1500), Currency::JPY))
        );
    }

    #[test]
    fn test_currency_alone_is_zero() {
        let params = CalculationParams::new().received_currency(Currency::USD);
        assert_eq!(params.received_side(RoundingMode::HalfUp), Some(Money::zero(Currency::USD)));
        assert_eq!(params.charged_side(RoundingMode::HalfUp), None);
    }

    #[test]
    fn test_deserialize_from_json_request() {
        let params: CalculationParams = serde_json::from_str(
            r#"{
                "charged_amount": "100",
                "charged_currency": "EUR",
                "received_currency": "USD",
                "commission": "5"
            }"#,
        )
        .unwrap();

        assert_eq!(
            params.charged_side(RoundingMode::HalfUp),
            Some(Money::new(dec!(100), Currency::EUR))
        );
        assert_eq!(params.received_side(RoundingMode::HalfUp), Some(Money::zero(Currency::USD)));
        assert_eq!(params.commission, Some(dec!(5)));
        assert_eq!(params.exchange_commission, None);
    }

    #[test]
    fn test_deserialize_money_amount() {
        let params: CalculationParams = serde_json::from_str(
            r#"{ "received_amount": { "amount": "12.5", "currency": "GBP" } }"#,
        )
        .unwrap();
        assert_eq!(
            params.received_side(RoundingMode::HalfUp),
            Some(Money::new(dec!(12.5), Currency::GBP))
        );
    }
}
