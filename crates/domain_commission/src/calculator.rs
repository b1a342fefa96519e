//! Calculator
//!
//! Picks the calculation direction from the supplied parameters, runs the
//! commission pipeline and assembles the [`Calculation`].

use std::fmt;
use std::sync::Arc;

use core_kernel::{Money, RoundingMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CommissionError, Result};
use crate::exchange::{Exchanger, IdentityExchanger};
use crate::operation::OperationOrder;
use crate::operator::{CommissionAction, CommissionRates, Operator};
use crate::params::CalculationParams;

/// Which side of the transaction is being derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Charged amount known, received amount computed
    Forward,
    /// Received amount known, charged amount computed
    Backward,
}

impl Direction {
    /// Commission formula used in this direction
    pub fn commission_action(&self) -> CommissionAction {
        match self {
            Direction::Forward => CommissionAction::Reduce,
            Direction::Backward => CommissionAction::Add,
        }
    }
}

/// Outcome of a calculation
///
/// Fees that were not charged are zero amounts, never missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub charged_amount: Money,
    pub received_amount: Money,
    pub fee: Money,
    pub exchange_fee: Money,
    /// Rate returned by the exchange strategy, zero when no exchange ran
    ///
    /// The rate converts the known side into the computed side: charged to
    /// received in the forward direction, received to charged in the
    /// backward direction. A EUR/USD rate of 1.25 forward shows up as 0.8
    /// backward.
    pub exchange_rate: Decimal,
}

/// Computes one side of a transaction from the other
///
/// A calculator is immutable once built. Cloning is cheap and the clones
/// share the exchange strategy.
#[derive(Clone)]
pub struct Calculator {
    exchanger: Arc<dyn Exchanger>,
    rounding_mode: RoundingMode,
    order: OperationOrder,
}

impl Calculator {
    /// Creates a calculator with the default rounding mode and order
    pub fn new(exchanger: impl Exchanger + 'static) -> Self {
        Self::with_settings(Arc::new(exchanger), RoundingMode::default(), OperationOrder::default())
    }

    pub(crate) fn with_settings(
        exchanger: Arc<dyn Exchanger>,
        rounding_mode: RoundingMode,
        order: OperationOrder,
    ) -> Self {
        Self {
            exchanger,
            rounding_mode,
            order,
        }
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Operation order used in the forward direction
    pub fn order(&self) -> &OperationOrder {
        &self.order
    }

    /// Calculates using this calculator's operation order
    ///
    /// # Errors
    ///
    /// - [`CommissionError::AmountUnknown`] unless exactly one side is non-zero
    /// - [`CommissionError::InvalidCommission`] for a 100% rate in the backward direction
    /// - [`CommissionError::Exchange`] when the exchange strategy fails
    /// - [`CommissionError::UnexpectedCurrency`] when it converts into the wrong currency
    pub fn calculate(&self, params: &CalculationParams) -> Result<Calculation> {
        self.calculate_with_order(params, &self.order)
    }

    /// Calculates using an explicit operation order
    #[tracing::instrument(
        level = "debug",
        skip(self, params),
        fields(order = %order, rounding_mode = %self.rounding_mode)
    )]
    pub fn calculate_with_order(
        &self,
        params: &CalculationParams,
        order: &OperationOrder,
    ) -> Result<Calculation> {
        let (known, unknown, direction) = select_direction(params, self.rounding_mode)?;
        let rates = CommissionRates::new(
            params.commission.unwrap_or_default(),
            params.exchange_commission.unwrap_or_default(),
        );

        let mut operator = Operator::new(
            known,
            unknown.currency(),
            rates,
            direction.commission_action(),
            self.rounding_mode,
            self.exchanger.as_ref(),
        );
        match direction {
            Direction::Forward => operator.apply_order(order)?,
            Direction::Backward => operator.apply_order(&order.reversed())?,
        }
        let outcome = operator.finish();

        let calculation = match direction {
            Direction::Forward => Calculation {
                charged_amount: known,
                received_amount: outcome.amount,
                fee: outcome.fee,
                exchange_fee: outcome.exchange_fee,
                exchange_rate: outcome.exchange_rate,
            },
            Direction::Backward => Calculation {
                charged_amount: outcome.amount,
                received_amount: known,
                fee: outcome.fee,
                exchange_fee: outcome.exchange_fee,
                exchange_rate: outcome.exchange_rate,
            },
        };

        info!(
            direction = ?direction,
            charged = %calculation.charged_amount,
            received = %calculation.received_amount,
            fee = %calculation.fee,
            exchange_fee = %calculation.exchange_fee,
            "Commission calculated"
        );
        Ok(calculation)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(IdentityExchanger)
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("rounding_mode", &self.rounding_mode)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// Returns the known side, the side to compute, and the direction
fn select_direction(
    params: &CalculationParams,
    mode: RoundingMode,
) -> Result<(Money, Money, Direction)> {
    match (params.charged_side(mode), params.received_side(mode)) {
        (Some(charged), Some(received)) if !charged.is_zero() && received.is_zero() => {
            Ok((charged, received, Direction::Forward))
        }
        (Some(charged), Some(received)) if !received.is_zero() && charged.is_zero() => {
            Ok((received, charged, Direction::Backward))
        }
        _ => Err(CommissionError::AmountUnknown),
    }
}
