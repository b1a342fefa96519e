//! Commission operator
//!
//! The operator carries a running amount through an ordered list of
//! [`Operation`]s. Each fee and each converted amount is rounded as soon as
//! it is produced.
//!
//! # Reduce vs Add
//!
//! Forward calculations know the charged amount and deduct a percentage of
//! it:
//!
//! ```text
//! fee = round(amount * rate / 100)            amount -= fee
//! ```
//!
//! Backward calculations know the amount that must be received and gross it
//! up so that deducting the same percentage later gives the target back:
//!
//! ```text
//! fee = round(amount * rate / (100 - rate))   amount += fee
//! ```
//!
//! Because of the intermediate rounding the two directions mirror each other
//! to within one minor unit per commission step, not exactly.

use core_kernel::{Currency, Money, MoneyError, Rate, RoundingMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::error::{CommissionError, Result};
use crate::exchange::Exchanger;
use crate::operation::{Operation, OperationOrder};

/// How a commission rate is applied to the running amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommissionAction {
    /// Deduct a share of a known amount (forward direction)
    Reduce,
    /// Gross up a known target amount (backward direction)
    Add,
}

/// Commission rates of a single calculation, as percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommissionRates {
    pub commission: Decimal,
    pub exchange_commission: Decimal,
}

impl CommissionRates {
    pub fn new(commission: Decimal, exchange_commission: Decimal) -> Self {
        Self {
            commission,
            exchange_commission,
        }
    }
}

/// Values accumulated by a finished pipeline run
///
/// Fees that were never produced are zero amounts in the source currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorOutcome {
    pub amount: Money,
    pub fee: Money,
    pub exchange_fee: Money,
    pub exchange_rate: Decimal,
}

/// Applies pipeline operations to a running amount
pub struct Operator<'a> {
    amount: Money,
    fee: Option<Money>,
    exchange_fee: Option<Money>,
    exchange_rate: Decimal,
    rates: CommissionRates,
    source: Currency,
    target: Currency,
    rounding_mode: RoundingMode,
    exchanger: &'a dyn Exchanger,
    action: CommissionAction,
}

impl<'a> Operator<'a> {
    /// Creates an operator starting from `amount`
    ///
    /// # Arguments
    ///
    /// * `amount` - The known amount; its currency is the source currency
    /// * `target` - Currency of the side being computed
    /// * `rates` - Commission and exchange commission percentages
    /// * `action` - Whether commissions are deducted or grossed up
    /// * `rounding_mode` - Rounding applied to every fee and conversion
    /// * `exchanger` - Strategy used by the exchange operation
    pub fn new(
        amount: Money,
        target: Currency,
        rates: CommissionRates,
        action: CommissionAction,
        rounding_mode: RoundingMode,
        exchanger: &'a dyn Exchanger,
    ) -> Self {
        Self {
            amount,
            fee: None,
            exchange_fee: None,
            exchange_rate: Decimal::ZERO,
            rates,
            source: amount.currency(),
            target,
            rounding_mode,
            exchanger,
            action,
        }
    }

    /// Current running amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn fee(&self) -> Option<Money> {
        self.fee
    }

    pub fn exchange_fee(&self) -> Option<Money> {
        self.exchange_fee
    }

    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    fn crosses_currencies(&self) -> bool {
        self.source != self.target
    }

    /// Runs every operation of `order` in sequence
    ///
    /// # Errors
    ///
    /// Stops at the first failing operation; nothing is returned for the
    /// operations already applied.
    pub fn apply_order(&mut self, order: &OperationOrder) -> Result<()> {
        for operation in order.operations() {
            self.apply(*operation)?;
        }
        Ok(())
    }

    /// Runs a single operation
    pub fn apply(&mut self, operation: Operation) -> Result<()> {
        match operation {
            Operation::Commission => {
                let fee = self.apply_commission(self.rates.commission)?;
                self.fee = Some(fee);
            }
            Operation::Exchange => self.exchange()?,
            Operation::ExchangeCommission => {
                if self.crosses_currencies() {
                    let fee = self.apply_commission(self.rates.exchange_commission)?;
                    self.exchange_fee = Some(fee);
                }
            }
        }

        debug!(
            operation = %operation,
            amount = %self.amount.amount(),
            currency = %self.amount.currency(),
            "Applied pipeline operation"
        );
        Ok(())
    }

    /// Applies a commission percentage and returns the rounded fee
    fn apply_commission(&mut self, percentage: Decimal) -> Result<Money> {
        let currency = self.amount.currency();
        let rate = Rate::from_percentage(percentage);
        if rate.is_zero() {
            return Ok(Money::zero(currency));
        }

        let base = self.amount.amount();
        let raw_fee = match self.action {
            CommissionAction::Reduce => base.checked_mul(rate.as_decimal()),
            CommissionAction::Add => {
                let remainder = dec!(100)
                    .checked_sub(percentage)
                    .ok_or(MoneyError::Overflow)?;
                if remainder.is_zero() {
                    return Err(CommissionError::InvalidCommission(percentage));
                }
                base.checked_mul(percentage)
                    .and_then(|grossed| grossed.checked_div(remainder))
            }
        }
        .ok_or(MoneyError::Overflow)?;

        let fee = self.rounding_mode.round(raw_fee, currency);
        self.amount = match self.action {
            CommissionAction::Reduce => self.amount.checked_sub(&fee)?,
            CommissionAction::Add => self.amount.checked_add(&fee)?,
        };

        Ok(fee)
    }

    /// Converts the running amount into the other side's currency
    fn exchange(&mut self) -> Result<()> {
        if !self.crosses_currencies() {
            return Ok(());
        }

        let from = self.amount.currency();
        let to = if from == self.target { self.source } else { self.target };

        let exchanged = self
            .exchanger
            .exchange(from, to, self.amount)
            .map_err(|err| {
                warn!(%from, %to, error = %err, "Exchange strategy failed");
                err
            })?;

        if exchanged.amount.currency() != to {
            warn!(
                expected = %to,
                actual = %exchanged.amount.currency(),
                "Exchange strategy returned an amount in the wrong currency"
            );
            return Err(CommissionError::UnexpectedCurrency {
                expected: to,
                actual: exchanged.amount.currency(),
            });
        }

        self.amount = exchanged.amount.rounded(self.rounding_mode);
        self.exchange_rate = exchanged.rate;
        Ok(())
    }

    /// Consumes the operator, filling unproduced fees with zero amounts
    pub fn finish(self) -> OperatorOutcome {
        let zero = Money::zero(self.source);
        OperatorOutcome {
            amount: self.amount,
            fee: self.fee.unwrap_or(zero),
            exchange_fee: self.exchange_fee.unwrap_or(zero),
            exchange_rate: self.exchange_rate,
        }
    }
}
