// ============================================================================
// Registry Configuration
// Declarative description of which currencies a registry starts with
// ============================================================================

use super::currency::CurrencyMetadata;
use crate::numeric::{MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Seed Data
// ============================================================================

/// Built-in data a registry is preloaded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedData {
    /// The full ISO 4217 list
    #[default]
    Iso4217,

    /// No built-in currencies; only explicitly configured ones
    Empty,
}

// ============================================================================
// Complete Registry Configuration
// ============================================================================

/// Configuration for building a `CurrencyRegistry`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryConfig {
    /// Built-in seed data
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: SeedData,

    /// Extra currencies registered after seeding; later entries win
    #[cfg_attr(feature = "serde", serde(default))]
    pub currencies: Vec<CurrencyMetadata>,
}

impl RegistryConfig {
    /// Create a configuration with the given seed and no extras
    pub fn new(seed: SeedData) -> Self {
        Self {
            seed,
            currencies: Vec::new(),
        }
    }

    /// Builder method: Replace the seed data
    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method: Add an extra currency
    pub fn with_currency(mut self, metadata: CurrencyMetadata) -> Self {
        self.currencies.push(metadata);
        self
    }

    /// Validate every extra currency
    pub fn validate(&self) -> MoneyResult<()> {
        for metadata in &self.currencies {
            metadata.validate()?;
        }

        if self.seed == SeedData::Empty && self.currencies.is_empty() {
            return Err(MoneyError::invalid(
                "an empty seed needs at least one configured currency",
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> MoneyResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MoneyError::invalid(format!("malformed registry config: {}", e)))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RegistryConfig {
    /// ISO 4217 list only
    pub fn iso4217() -> Self {
        Self::new(SeedData::Iso4217)
    }

    /// Nothing preloaded; add currencies with `with_currency`
    pub fn empty() -> Self {
        Self::new(SeedData::Empty)
    }
}
