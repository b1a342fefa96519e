//! Test Data Builders
//!
//! Provides a builder for stub exchangers. Stubs convert with fixed rates
//! and record every call so tests can check what the calculator asked for.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use core_kernel::{Currency, Money};
use domain_commission::{ExchangeError, Exchanged, Exchanger};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One recorded exchange request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeCall {
    pub from: Currency,
    pub to: Currency,
    pub amount: Money,
}

/// Exchanger that records its calls
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct RecordingExchanger {
    rates: HashMap<(Currency, Currency), Decimal>,
    default_rate: Option<Decimal>,
    calls: Arc<Mutex<Vec<ExchangeCall>>>,
}

impl RecordingExchanger {
    /// Returns every call made so far, oldest first
    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Exchanger for RecordingExchanger {
    fn exchange(
        &self,
        from: Currency,
        to: Currency,
        amount: Money,
    ) -> Result<Exchanged, ExchangeError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ExchangeCall { from, to, amount });
        }

        let rate = self
            .rates
            .get(&(from, to))
            .copied()
            .or(self.default_rate)
            .ok_or(ExchangeError::RateUnavailable { from, to })?;

        Ok(Exchanged::new(Money::new(amount.amount() * rate, to), rate))
    }
}

/// Builder for [`RecordingExchanger`]
pub struct RecordingExchangerBuilder {
    rates: HashMap<(Currency, Currency), Decimal>,
    default_rate: Option<Decimal>,
}

impl Default for RecordingExchangerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingExchangerBuilder {
    /// Creates a builder that converts every pair 1:1
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
            default_rate: Some(dec!(1)),
        }
    }

    /// Sets the rate for one direction of a pair
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Self {
        self.rates.insert((from, to), rate);
        self
    }

    /// Removes the 1:1 fallback so unknown pairs fail
    pub fn strict(mut self) -> Self {
        self.default_rate = None;
        self
    }

    pub fn build(self) -> RecordingExchanger {
        RecordingExchanger {
            rates: self.rates,
            default_rate: self.default_rate,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}
