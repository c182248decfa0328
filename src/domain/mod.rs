// ============================================================================
// Domain Models Module
// Currencies, money values, conversion pairs and registry configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod currency_pair;
pub mod money;

pub use config::{RegistryConfig, SeedData};
pub use currency::{Currency, CurrencyMetadata};
pub use currency_pair::CurrencyPair;
pub use money::{Money, MoneySnapshot, PercentageExtraction};
