//! Pipeline operations and their ordering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommissionError;

/// A single step of the commission pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Apply the transaction commission
    Commission,
    /// Convert between the two currencies
    Exchange,
    /// Apply the exchange-specific commission (only when currencies differ)
    ExchangeCommission,
}

impl Operation {
    /// Returns the configuration name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Commission => "commission",
            Operation::Exchange => "exchange",
            Operation::ExchangeCommission => "exchange_commission",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "commission" => Ok(Operation::Commission),
            "exchange" => Ok(Operation::Exchange),
            "exchange_commission" => Ok(Operation::ExchangeCommission),
            other => Err(CommissionError::UnknownOperation(other.to_string())),
        }
    }
}

/// Ordered list of operations applied in the forward direction
///
/// Repeats and omissions are allowed. The backward direction runs the same
/// list reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationOrder(Vec<Operation>);

impl OperationOrder {
    /// Creates an order from the given operations
    pub fn new(operations: impl Into<Vec<Operation>>) -> Self {
        Self(operations.into())
    }

    /// Returns the operations in forward order
    pub fn operations(&self) -> &[Operation] {
        &self.0
    }

    /// Returns the order used for backward calculations
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Returns true if `operation` appears anywhere in the order
    pub fn contains(&self, operation: Operation) -> bool {
        self.0.contains(&operation)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for OperationOrder {
    fn default() -> Self {
        Self(vec![
            Operation::Commission,
            Operation::Exchange,
            Operation::ExchangeCommission,
        ])
    }
}

impl From<Vec<Operation>> for OperationOrder {
    fn from(operations: Vec<Operation>) -> Self {
        Self(operations)
    }
}

impl<const N: usize> From<[Operation; N]> for OperationOrder {
    fn from(operations: [Operation; N]) -> Self {
        Self(operations.to_vec())
    }
}

impl fmt::Display for OperationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Operation::name).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses a comma-separated list such as `commission,exchange`
impl FromStr for OperationOrder {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Operation::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
