//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Commission configuration.
    #[serde(default)]
    pub commission: CommissionConfig,
}

/// How per-employee service counts are sourced for commission payouts.
///
/// This is a company-level setting supplied to the core as a dispatch key;
/// the core never decides the mode itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionMode {
    /// Derive service counts from same-day sales voucher lines.
    #[default]
    Transactional,
    /// Use manually entered stylist service tallies.
    Manual,
}

/// Commission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// Payout per service rendered, in the company currency.
    #[serde(default = "default_rate_per_service")]
    pub rate_per_service: Decimal,
    /// Company-level commission data-entry mode.
    #[serde(default)]
    pub mode: CommissionMode,
}

fn default_rate_per_service() -> Decimal {
    Decimal::ONE
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            rate_per_service: default_rate_per_service(),
            mode: CommissionMode::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CASHUP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
