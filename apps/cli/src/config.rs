//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--shipping`, `--strict`, `--format`)
//! 2. Environment variables (`QA_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `QA_CURRENCY_SYMBOL`: symbol used when printing amounts (default `$`)
//! - `QA_DEFAULT_SHIPPING`: `standard` or `express` (default `standard`)
//! - `QA_STRICT_DISCOUNTS`: `true` makes an unknown discount code an error
//! - `QA_OUTPUT_FORMAT`: `pretty` or `json` (default `pretty`)

use clap::ValueEnum;
use qa_core::{Money, ShippingMethod};
use serde::Serialize;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Shipping method used when neither the flag nor the cart file names one.
    pub default_shipping: ShippingMethod,

    /// Treat an unrecognised discount code as a failure instead of a warning.
    pub strict_discounts: bool,

    /// Output format when `--format` is not given.
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: "$".to_string(),
            default_shipping: ShippingMethod::Standard,
            strict_discounts: false,
            output_format: OutputFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every key it doesn't know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(symbol) = lookup("QA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(shipping) = lookup("QA_DEFAULT_SHIPPING") {
            config.default_shipping = shipping
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QA_DEFAULT_SHIPPING".to_string()))?;
        }

        if let Some(strict) = lookup("QA_STRICT_DISCOUNTS") {
            config.strict_discounts = strict
                .trim()
                .to_ascii_lowercase()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QA_STRICT_DISCOUNTS".to_string()))?;
        }

        if let Some(format) = lookup("QA_OUTPUT_FORMAT") {
            config.output_format = OutputFormat::from_str(format.trim(), true)
                .map_err(|_| ConfigError::InvalidValue("QA_OUTPUT_FORMAT".to_string()))?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use qa_cli::config::CliConfig;
    /// use qa_core::Money;
    ///
    /// let config = CliConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(5250)), "$52.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
