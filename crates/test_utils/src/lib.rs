//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! commission calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built money values, parameters and exchangers
//! - `builders`: Builder for stub exchangers that record their calls
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber that writes through the test harness
///
/// Honours `RUST_LOG`; defaults to `debug` for the calculator crates. Safe to
/// call from every test.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("domain_commission=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
