//! Commission Domain - Charged/Received Amount Calculation
//!
//! This crate computes the amount on one side of a currency transaction from
//! the amount known on the other side, applying commission fees and currency
//! exchange in a configurable order.
//!
//! # Directions
//!
//! - **Forward**: the charged amount is known; commissions are deducted and
//!   the amount is exchanged to produce the received amount.
//! - **Backward**: the received amount is known; the same operations run in
//!   reverse order and commissions are grossed up to produce the charged
//!   amount.
//!
//! # Pipeline
//!
//! - `commission`: transaction commission
//! - `exchange`: conversion through the configured [`Exchanger`]
//! - `exchange_commission`: exchange markup, only when the currencies differ
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_commission::{CalculationParams, Calculator};
//!
//! let calculator = Calculator::from_config(&CommissionerConfig::from_env()?)?;
//!
//! let result = calculator.calculate(
//!     &CalculationParams::new()
//!         .charged(dec!(100), Currency::EUR)
//!         .received_currency(Currency::USD)
//!         .commission(dec!(2)),
//! )?;
//!
//! println!("payee receives {}", result.received_amount);
//! ```

pub mod operation;
pub mod exchange;
pub mod operator;
pub mod params;
pub mod calculator;
pub mod builder;
pub mod config;
pub mod error;

pub use operation::{Operation, OperationOrder};
pub use exchange::{
    ExchangeError, Exchanged, Exchanger, FixedRate, FixedRateExchanger, IdentityExchanger,
};
pub use operator::{CommissionAction, CommissionRates};
pub use params::{AmountInput, CalculationParams};
pub use calculator::{Calculation, Calculator, Direction};
pub use builder::CalculatorBuilder;
pub use config::{CommissionerConfig, ExchangerSettings};
pub use error::{CommissionError, AMOUNT_UNKNOWN_HELP};

/// Calculates with a calculator built from `config`
///
/// Convenience for one-off calls. Callers running many calculations should
/// build a [`Calculator`] once and reuse it.
///
/// # Errors
///
/// Configuration errors surface before any arithmetic runs; calculation
/// errors are those of [`Calculator::calculate`].
pub fn calculate(
    params: &CalculationParams,
    config: &CommissionerConfig,
) -> error::Result<Calculation> {
    Calculator::from_config(config)?.calculate(params)
}
