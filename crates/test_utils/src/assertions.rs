//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Currency, Money};
use domain_commission::Calculation;
use rust_decimal::Decimal;

/// Asserts that a Money value has the expected amount and currency
pub fn assert_money_eq(actual: &Money, amount: Decimal, currency: Currency) {
    assert_eq!(
        actual.currency(),
        currency,
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        currency
    );
    assert_eq!(
        actual.amount(),
        amount,
        "Amount mismatch: actual={}, expected={} {}",
        actual,
        amount,
        currency
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual Money value
/// * `expected` - The expected Money value
/// * `tolerance` - The allowed difference in the amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: &Money) {
    assert!(
        !money.is_negative(),
        "Expected non-negative money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that an amount carries no more digits than its currency allows
pub fn assert_money_at_currency_precision(money: &Money) {
    let allowed = money.currency().decimal_places();
    let normalized = money.amount().normalize();
    assert!(
        normalized.scale() <= allowed,
        "{} has {} decimal places, {} allows {}",
        money.amount(),
        normalized.scale(),
        money.currency(),
        allowed
    );
}

/// Asserts that every monetary field of a calculation is rounded
pub fn assert_calculation_rounded(calculation: &Calculation) {
    assert_money_at_currency_precision(&calculation.charged_amount);
    assert_money_at_currency_precision(&calculation.received_amount);
    assert_money_at_currency_precision(&calculation.fee);
    assert_money_at_currency_precision(&calculation.exchange_fee);
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
