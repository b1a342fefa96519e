//! Core Kernel - Foundational types for commission and exchange calculations
//!
//! This crate provides the building blocks used by the calculation domain:
//! - Money and Currency types with precise decimal arithmetic
//! - Percentage rates
//! - The rounding policy applied to every fee and converted amount

pub mod money;
pub mod rounding;

pub use money::{Money, Currency, MoneyError, Rate};
pub use rounding::{RoundingMode, ParseRoundingModeError};
