//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, rounding through the
//! rounding policy, currency handling, and rates.

use core_kernel::{Currency, Money, MoneyError, Rate, RoundingMode};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_does_not_round() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(
            Money::new(dec!(90), Currency::EUR),
            Money::new(dec!(90.00), Currency::EUR)
        );
        assert_ne!(
            Money::new(dec!(90), Currency::EUR),
            Money::new(dec!(90), Currency::USD)
        );
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(95.00), Currency::USD);
        let b = Money::new(dec!(9.50), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(104.50));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(-70.00));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let _ = Money::new(dec!(1), Currency::USD) + Money::new(dec!(1), Currency::EUR);
    }

    #[test]
    fn test_checked_add_overflow_is_an_error() {
        let big = Money::new(rust_decimal::Decimal::MAX, Currency::EUR);
        assert_eq!(big.checked_add(&big), Err(MoneyError::Overflow));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_rounded_usd() {
        let m = Money::new(dec!(100.1250), Currency::USD);
        assert_eq!(m.rounded(RoundingMode::HalfUp).amount(), dec!(100.13));
        assert_eq!(m.rounded(RoundingMode::HalfEven).amount(), dec!(100.12));
        assert_eq!(m.rounded(RoundingMode::Down).amount(), dec!(100.12));
        assert_eq!(m.rounded(RoundingMode::Up).amount(), dec!(100.13));
    }

    #[test]
    fn test_rounded_jpy() {
        // JPY has 0 decimal places, so 100.60 rounds up to 101
        let m = Money::new(dec!(100.60), Currency::JPY);
        assert_eq!(m.rounded(RoundingMode::HalfUp).amount(), dec!(101));
        assert_eq!(m.rounded(RoundingMode::Down).amount(), dec!(100));
    }

    #[test]
    fn test_rounded_keeps_currency() {
        let m = Money::new(dec!(1.005), Currency::GBP);
        assert_eq!(m.rounded(RoundingMode::HalfUp).currency(), Currency::GBP);
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols_and_parse_back() {
        for currency in Currency::ALL {
            assert!(!currency.symbol().is_empty());
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_minor_unit() {
        assert_eq!(Currency::USD.minor_unit(), dec!(0.01));
        assert_eq!(Currency::JPY.minor_unit(), dec!(1));
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            "ABC".parse::<Currency>(),
            Err(MoneyError::UnknownCurrency(_))
        ));
    }
}

mod rate {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(10));
        assert_eq!(rate.as_decimal(), dec!(0.1));
        assert_eq!(rate.as_percentage(), dec!(10));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(format!("{}", Rate::from_percentage(dec!(1))), "1%");
    }
}
