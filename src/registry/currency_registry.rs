// ============================================================================
// Currency Registry
// Thread-safe mapping from currency code to metadata
// ============================================================================

use super::iso4217::ISO_4217;
use crate::domain::currency::normalize_code;
use crate::domain::{Currency, CurrencyMetadata};
use crate::numeric::{MoneyError, MoneyResult};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

/// Process-wide registry, seeded with ISO 4217 on first use.
static GLOBAL_REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

/// Registry of known currencies.
///
/// Entries are stored behind `Arc` and replaced wholesale under a write lock,
/// so a concurrent reader sees either the old or the new entry, never a mix.
/// The registry is additive: entries can be inserted or overwritten but never
/// removed.
pub struct CurrencyRegistry {
    entries: RwLock<HashMap<String, Arc<CurrencyMetadata>>>,
}

impl CurrencyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry preloaded with the ISO 4217 list.
    pub fn with_iso4217() -> Self {
        let entries = ISO_4217
            .iter()
            .map(|&(code, name, numeric, digits, divisor)| {
                let metadata = CurrencyMetadata::new(code, name, numeric, digits, divisor);
                (metadata.code.clone(), Arc::new(metadata))
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// The shared default registry.
    pub fn global() -> &'static CurrencyRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            let registry = CurrencyRegistry::with_iso4217();
            tracing::debug!(
                currencies = registry.len(),
                "global currency registry initialized"
            );
            registry
        })
    }

    /// Metadata for `code`, matched case-insensitively.
    ///
    /// The code is normalized before matching: surrounding whitespace is
    /// trimmed and letters are uppercased, so `" usd "` finds `USD`. The same
    /// normalization applies to `register`, `contains` and `currency`.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is absent.
    pub fn lookup(&self, code: &str) -> MoneyResult<Arc<CurrencyMetadata>> {
        let normalized = normalize_code(code);
        self.entries
            .read()
            .get(&normalized)
            .cloned()
            .ok_or(MoneyError::UnknownCurrency(normalized))
    }

    /// Build a `Currency` for `code`.
    pub fn currency(&self, code: &str) -> MoneyResult<Currency> {
        self.lookup(code).map(Currency::from_metadata)
    }

    /// Insert or overwrite an entry.
    ///
    /// Numeric codes need not be unique.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the metadata fails validation.
    pub fn register(&self, metadata: CurrencyMetadata) -> MoneyResult<()> {
        let metadata = CurrencyMetadata {
            code: normalize_code(&metadata.code),
            ..metadata
        };
        metadata.validate()?;

        let code = metadata.code.clone();
        let previous = self
            .entries
            .write()
            .insert(code.clone(), Arc::new(metadata));

        tracing::debug!(
            code = %code,
            replaced = previous.is_some(),
            "currency registered"
        );
        Ok(())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.read().contains_key(&normalize_code(code))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Ordered, owned snapshot of every entry.
    pub fn all_entries(&self) -> BTreeMap<String, CurrencyMetadata> {
        self.entries
            .read()
            .iter()
            .map(|(code, metadata)| (code.clone(), (**metadata).clone()))
            .collect()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::with_iso4217()
    }
}

impl std::fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("currencies", &self.len())
            .finish()
    }
}
