// ============================================================================
// Registry Factory
// Creates currency registries from configuration
// ============================================================================

use super::CurrencyRegistry;
use crate::domain::config::{RegistryConfig, SeedData};
use crate::domain::CurrencyMetadata;
use crate::numeric::MoneyResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a currency registry from configuration
///
/// # Example
/// ```
/// use money::domain::{CurrencyMetadata, RegistryConfig};
/// use money::registry::create_from_config;
///
/// let config = RegistryConfig::iso4217()
///     .with_currency(CurrencyMetadata::new("BTC", "Bitcoin", 999, 4, 1000));
/// let registry = create_from_config(config).unwrap();
///
/// assert!(registry.contains("EUR"));
/// assert!(registry.contains("btc"));
/// ```
pub fn create_from_config(config: RegistryConfig) -> MoneyResult<CurrencyRegistry> {
    config.validate()?;

    let registry = match config.seed {
        SeedData::Iso4217 => CurrencyRegistry::with_iso4217(),
        SeedData::Empty => CurrencyRegistry::new(),
    };

    let extras = config.currencies.len();
    for metadata in config.currencies {
        registry.register(metadata)?;
    }

    tracing::debug!(
        seed = ?config.seed,
        extras,
        currencies = registry.len(),
        "currency registry created from config"
    );

    Ok(registry)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for currency registries
///
/// # Example
/// ```
/// use money::registry::CurrencyRegistryBuilder;
///
/// let registry = CurrencyRegistryBuilder::new()
///     .without_seed()
///     .with_currency("XTS", "Testing Code", 963, 2, 100)
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistryBuilder {
    config: RegistryConfig,
}

impl CurrencyRegistryBuilder {
    /// Start from the ISO 4217 seed
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::iso4217(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Drop the ISO 4217 seed
    pub fn without_seed(mut self) -> Self {
        self.config.seed = SeedData::Empty;
        self
    }

    /// Add a currency from its parts
    pub fn with_currency(
        self,
        code: &str,
        display_name: &str,
        numeric_code: u16,
        default_fraction_digits: u8,
        minor_unit_divisor: u32,
    ) -> Self {
        self.with_metadata(CurrencyMetadata::new(
            code,
            display_name,
            numeric_code,
            default_fraction_digits,
            minor_unit_divisor,
        ))
    }

    /// Add a prepared metadata entry
    pub fn with_metadata(mut self, metadata: CurrencyMetadata) -> Self {
        self.config.currencies.push(metadata);
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Build the registry
    pub fn build(self) -> MoneyResult<CurrencyRegistry> {
        create_from_config(self.config)
    }
}
