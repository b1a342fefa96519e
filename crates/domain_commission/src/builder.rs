//! Builder for reusable calculators
//!
//! A builder captures an exchange strategy, a rounding mode and an operation
//! order, and produces [`Calculator`]s from them. Each builder and each
//! calculator owns its settings, so configuring one never changes another.
//!
//! # Example
//!
//! ```rust,ignore
//! let calculator = CalculatorBuilder::new()
//!     .exchanger(FixedRateExchanger::new(rates)?)
//!     .rounding_mode(RoundingMode::HalfEven)
//!     .order([Operation::Commission, Operation::ExchangeCommission, Operation::Exchange])
//!     .build();
//!
//! let result = calculator.calculate(&params)?;
//! ```

use std::sync::Arc;

use core_kernel::RoundingMode;
use tracing::debug;

use crate::calculator::Calculator;
use crate::config::{CommissionerConfig, ExchangerSettings};
use crate::error::Result;
use crate::exchange::{Exchanger, FixedRateExchanger, IdentityExchanger};
use crate::operation::OperationOrder;

/// Builder for [`Calculator`] instances
#[derive(Clone)]
pub struct CalculatorBuilder {
    exchanger: Arc<dyn Exchanger>,
    rounding_mode: RoundingMode,
    order: OperationOrder,
}

impl CalculatorBuilder {
    /// Creates a builder with the identity exchanger, half-up rounding and
    /// the default operation order
    pub fn new() -> Self {
        Self {
            exchanger: Arc::new(IdentityExchanger),
            rounding_mode: RoundingMode::default(),
            order: OperationOrder::default(),
        }
    }

    /// Creates a builder from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`InvalidExchangeStrategy`](crate::CommissionError::InvalidExchangeStrategy) if
    /// the configured exchanger cannot be constructed.
    pub fn from_config(config: &CommissionerConfig) -> Result<Self> {
        let exchanger: Arc<dyn Exchanger> = match &config.exchanger {
            ExchangerSettings::Identity => Arc::new(IdentityExchanger),
            ExchangerSettings::FixedRates { rates } => {
                Arc::new(FixedRateExchanger::new(rates.iter().copied())?)
            }
        };

        debug!(
            rounding_mode = %config.rounding_mode,
            order = %config.order,
            "Calculator builder configured"
        );

        Ok(Self {
            exchanger,
            rounding_mode: config.rounding_mode,
            order: config.order.clone(),
        })
    }

    /// Sets the exchange strategy
    pub fn exchanger(mut self, exchanger: impl Exchanger + 'static) -> Self {
        self.exchanger = Arc::new(exchanger);
        self
    }

    /// Sets an exchange strategy shared with other calculators
    pub fn shared_exchanger(mut self, exchanger: Arc<dyn Exchanger>) -> Self {
        self.exchanger = exchanger;
        self
    }

    /// Sets the rounding mode
    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Sets the forward operation order
    pub fn order(mut self, order: impl Into<OperationOrder>) -> Self {
        self.order = order.into();
        self
    }

    /// Builds a calculator; the builder can be reused for more
    pub fn build(&self) -> Calculator {
        Calculator::with_settings(
            Arc::clone(&self.exchanger),
            self.rounding_mode,
            self.order.clone(),
        )
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Starts a [`CalculatorBuilder`]
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Builds a calculator from loaded configuration
    ///
    /// # Errors
    ///
    /// Fails with `InvalidExchangeStrategy` before any calculation runs if the
    /// configured exchanger is unusable.
    pub fn from_config(config: &CommissionerConfig) -> Result<Self> {
        Ok(CalculatorBuilder::from_config(config)?.build())
    }
}
