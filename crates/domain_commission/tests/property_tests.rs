//! Property-Based Tests
//!
//! Laws that hold for every amount, rate, rounding mode and operation order.

use core_kernel::{Currency, Money};
use domain_commission::{CalculationParams, Calculator, Operation};
use proptest::prelude::*;
use rust_decimal::Decimal;
use test_utils::{
    assert_calculation_rounded, assert_money_non_negative, commission_percentage_strategy,
    currency_strategy, moderate_percentage_strategy, operation_order_strategy,
    permutation_order_strategy, positive_amount_minor_strategy, rounding_mode_strategy,
};

proptest! {
    /// Deducting a commission and grossing the result back up lands within
    /// one minor unit of the start
    #[test]
    fn prop_reduce_then_add_recovers_amount(
        minor in positive_amount_minor_strategy(),
        currency in currency_strategy(),
        commission in moderate_percentage_strategy(),
        mode in rounding_mode_strategy(),
    ) {
        let calculator = Calculator::builder()
            .rounding_mode(mode)
            .order([Operation::Commission])
            .build();
        let start = Money::from_minor(minor, currency);

        let forward = calculator
            .calculate(
                &CalculationParams::new()
                    .charged_money(start)
                    .received_currency(currency)
                    .commission(commission),
            )
            .unwrap();
        prop_assume!(!forward.received_amount.is_zero());

        let backward = calculator
            .calculate(
                &CalculationParams::new()
                    .received_money(forward.received_amount)
                    .charged_currency(currency)
                    .commission(commission),
            )
            .unwrap();

        let drift = (backward.charged_amount.amount() - start.amount()).abs();
        prop_assert!(
            drift <= currency.minor_unit(),
            "{} came back as {}", start, backward.charged_amount
        );
    }

    /// No exchange commission is charged without a currency change
    #[test]
    fn prop_same_currency_has_no_exchange_fee(
        minor in positive_amount_minor_strategy(),
        currency in currency_strategy(),
        commission in commission_percentage_strategy(),
        exchange_commission in commission_percentage_strategy(),
        order in operation_order_strategy(),
        mode in rounding_mode_strategy(),
    ) {
        let calculator = Calculator::builder().rounding_mode(mode).order(order).build();

        let result = calculator
            .calculate(
                &CalculationParams::new()
                    .charged_money(Money::from_minor(minor, currency))
                    .received_currency(currency)
                    .commission(commission)
                    .exchange_commission(exchange_commission),
            )
            .unwrap();

        prop_assert!(result.exchange_fee.is_zero());
        prop_assert_eq!(result.received_amount.currency(), currency);
    }

    /// Fees are never negative and every amount is at currency precision
    #[test]
    fn prop_fees_non_negative_and_rounded(
        minor in positive_amount_minor_strategy(),
        from in currency_strategy(),
        to in currency_strategy(),
        commission in commission_percentage_strategy(),
        exchange_commission in commission_percentage_strategy(),
        order in operation_order_strategy(),
        mode in rounding_mode_strategy(),
        backward in any::<bool>(),
    ) {
        let calculator = Calculator::builder().rounding_mode(mode).order(order).build();
        let known = Money::from_minor(minor, from);
        let params = if backward {
            CalculationParams::new().received_money(known).charged_currency(to)
        } else {
            CalculationParams::new().charged_money(known).received_currency(to)
        }
        .commission(commission)
        .exchange_commission(exchange_commission);

        let result = calculator.calculate(&params).unwrap();

        assert_money_non_negative(&result.fee);
        assert_money_non_negative(&result.exchange_fee);
        assert_calculation_rounded(&result);
    }

    /// Reordering the operations moves fees between currencies but never
    /// drops one
    #[test]
    fn prop_order_does_not_change_populated_fields(
        minor in 10_000i64..1_000_000_000i64,
        commission in (100u32..5001u32).prop_map(|n| Decimal::new(n as i64, 2)),
        exchange_commission in (100u32..5001u32).prop_map(|n| Decimal::new(n as i64, 2)),
        order in permutation_order_strategy(),
    ) {
        let calculator = Calculator::builder().order(order).build();

        let result = calculator
            .calculate(
                &CalculationParams::new()
                    .charged_money(Money::from_minor(minor, Currency::EUR))
                    .received_currency(Currency::USD)
                    .commission(commission)
                    .exchange_commission(exchange_commission),
            )
            .unwrap();

        prop_assert!(result.fee.is_positive());
        prop_assert!(result.exchange_fee.is_positive());
        prop_assert_eq!(result.received_amount.currency(), Currency::USD);
        prop_assert_eq!(result.exchange_rate, Decimal::ONE);
    }
}
