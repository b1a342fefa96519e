//! Calculator configuration
//!
//! Configuration is an immutable value. Load it once, build calculators from
//! it, and build new calculators when a different setup is needed.
//!
//! # Environment Variables
//!
//! * `COMMISSIONER_ROUNDING_MODE` - `up`, `down`, `half_up` or `half_even` (default: half_up)
//! * `COMMISSIONER_ORDER` - comma-separated operations (default: commission,exchange,exchange_commission)
//! * `COMMISSIONER_EXCHANGER__KIND` - `identity` (default) or `fixed_rates`
//!
//! Fixed rate tables are easier to express in TOML:
//!
//! ```toml
//! rounding_mode = "half_even"
//! order = ["commission", "exchange_commission", "exchange"]
//!
//! [exchanger]
//! kind = "fixed_rates"
//! rates = [{ from = "EUR", to = "USD", rate = "1.0850" }]
//! ```

use core_kernel::RoundingMode;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exchange::FixedRate;
use crate::operation::OperationOrder;

/// Which exchange strategy a configured calculator uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExchangerSettings {
    /// Convert 1:1
    #[default]
    Identity,
    /// Convert with a static rate table
    FixedRates {
        #[serde(default)]
        rates: Vec<FixedRate>,
    },
}

/// Settings shared by every calculation of a calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionerConfig {
    /// Rounding applied to every fee and converted amount
    pub rounding_mode: RoundingMode,
    /// Forward operation order
    pub order: OperationOrder,
    /// Exchange strategy
    pub exchanger: ExchangerSettings,
}

impl CommissionerConfig {
    /// Loads configuration from the environment
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("COMMISSIONER")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("order")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads configuration from a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn with_order(mut self, order: impl Into<OperationOrder>) -> Self {
        self.order = order.into();
        self
    }

    pub fn with_fixed_rates(mut self, rates: impl IntoIterator<Item = FixedRate>) -> Self {
        self.exchanger = ExchangerSettings::FixedRates {
            rates: rates.into_iter().collect(),
        };
        self
    }
}
