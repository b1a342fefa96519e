//! Commission domain errors
//!
//! This module defines all error types that can occur while configuring a
//! calculator or running a calculation.

use core_kernel::{Currency, MoneyError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::exchange::ExchangeError;

/// Help text returned with [`CommissionError::AmountUnknown`]
pub const AMOUNT_UNKNOWN_HELP: &str = "You must provide either charged_amount (with charged_currency) \
     or received_amount (with received_currency). If none or both are non-zero, \
     the calculator cannot know which side to compute.";

/// Errors that can occur in the commission domain
#[derive(Debug, Error)]
pub enum CommissionError {
    /// Neither or both sides of the transaction are known
    #[error("{}", AMOUNT_UNKNOWN_HELP)]
    AmountUnknown,

    /// The configured exchange strategy cannot be used
    #[error("Invalid exchange strategy: {0}")]
    InvalidExchangeStrategy(String),

    /// A commission rate the grossing-up formula cannot apply
    #[error("Invalid commission rate: {0}%")]
    InvalidCommission(Decimal),

    /// An operation name that is not part of the pipeline
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The exchange strategy returned an amount in the wrong currency
    #[error("Exchange returned {actual}, expected {expected}")]
    UnexpectedCurrency {
        expected: Currency,
        actual: Currency,
    },

    /// Failure raised by the exchange strategy itself
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    /// Money arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for CommissionError {
    fn from(err: config::ConfigError) -> Self {
        CommissionError::Configuration(err.to_string())
    }
}

/// Result alias for commission operations
pub type Result<T> = std::result::Result<T, CommissionError>;
