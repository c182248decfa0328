// ============================================================================
// Registry Module
// Currency metadata store, seed data and construction from configuration
// ============================================================================

mod currency_registry;
pub mod factory;
mod iso4217;

pub use currency_registry::CurrencyRegistry;
pub use factory::{create_from_config, CurrencyRegistryBuilder};
