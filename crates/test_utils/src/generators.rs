//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money, RoundingMode};
use domain_commission::{Operation, OperationOrder};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::ALL.to_vec())
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating commission percentages (0% to 99.99%)
pub fn commission_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..10000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating everyday commission percentages (0% to 50%)
pub fn moderate_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..5001u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating rounding modes
pub fn rounding_mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfEven),
    ]
}

/// Strategy for generating single operations
pub fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Commission),
        Just(Operation::Exchange),
        Just(Operation::ExchangeCommission),
    ]
}

/// Strategy for generating permutations of the three operations
pub fn permutation_order_strategy() -> impl Strategy<Value = OperationOrder> {
    Just(vec![
        Operation::Commission,
        Operation::Exchange,
        Operation::ExchangeCommission,
    ])
    .prop_shuffle()
    .prop_map(OperationOrder::from)
}

/// Strategy for generating arbitrary orders, with repeats and omissions
pub fn operation_order_strategy() -> impl Strategy<Value = OperationOrder> {
    proptest::collection::vec(operation_strategy(), 0..6).prop_map(OperationOrder::from)
}
