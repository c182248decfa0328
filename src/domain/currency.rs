// ============================================================================
// Currency Domain Model
// Registry metadata and the validated Currency value object
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use crate::registry::CurrencyRegistry;
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported number of presentation decimals.
pub const MAX_FRACTION_DIGITS: u8 = 18;

// ============================================================================
// Currency Metadata
// ============================================================================

/// Immutable registry entry describing one currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyMetadata {
    /// Three-letter uppercase code (e.g. "EUR")
    pub code: String,

    /// Human-readable name (e.g. "Euro")
    pub display_name: String,

    /// ISO numeric code; not unique across entries
    pub numeric_code: u16,

    /// Decimals used when presenting an amount in major units
    pub default_fraction_digits: u8,

    /// Minor units per major unit; not always a power of ten
    pub minor_unit_divisor: u32,
}

impl CurrencyMetadata {
    /// Create metadata; the code is normalized to uppercase.
    pub fn new(
        code: impl AsRef<str>,
        display_name: impl Into<String>,
        numeric_code: u16,
        default_fraction_digits: u8,
        minor_unit_divisor: u32,
    ) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            display_name: display_name.into(),
            numeric_code,
            default_fraction_digits,
            minor_unit_divisor,
        }
    }

    /// Validate the entry before it is stored in a registry.
    pub fn validate(&self) -> MoneyResult<()> {
        if !is_currency_code(&self.code) {
            return Err(MoneyError::invalid(format!(
                "currency code must be three ASCII letters, got \"{}\"",
                self.code
            )));
        }

        if self.minor_unit_divisor < 1 {
            return Err(MoneyError::invalid(format!(
                "minor unit divisor of {} must be at least 1",
                self.code
            )));
        }

        if self.default_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::invalid(format!(
                "{} declares {} fraction digits, maximum is {}",
                self.code, self.default_fraction_digits, MAX_FRACTION_DIGITS
            )));
        }

        // The widest amount, in major units at full precision, must fit a
        // Decimal mantissa so conversions never drop requested digits
        let widest = u128::from(i64::MIN.unsigned_abs())
            * 10u128.pow(u32::from(self.default_fraction_digits));
        let max_mantissa = Decimal::MAX.mantissa().unsigned_abs();
        if widest.div_ceil(u128::from(self.minor_unit_divisor)) > max_mantissa {
            return Err(MoneyError::invalid(format!(
                "{} cannot present {} fraction digits with a minor unit divisor of {}",
                self.code, self.default_fraction_digits, self.minor_unit_divisor
            )));
        }

        Ok(())
    }
}

/// Canonical form of a user-supplied code: trimmed and uppercased.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

// ============================================================================
// Currency Value Object
// ============================================================================

/// A currency validated against a registry.
///
/// Holds the metadata snapshot taken when it was constructed, so it stays
/// valid and cheap to share across threads regardless of later registrations.
/// Equality and hashing use the code only.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Currency {
    metadata: Arc<CurrencyMetadata>,
}

impl Currency {
    /// Look up `code` (case-insensitive) in the global registry.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn new(code: &str) -> MoneyResult<Self> {
        CurrencyRegistry::global().currency(code)
    }

    /// Look up `code` in an explicit registry.
    pub fn from_registry(code: &str, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        registry.currency(code)
    }

    pub(crate) fn from_metadata(metadata: Arc<CurrencyMetadata>) -> Self {
        Self { metadata }
    }

    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    pub fn numeric_code(&self) -> u16 {
        self.metadata.numeric_code
    }

    pub fn default_fraction_digits(&self) -> u8 {
        self.metadata.default_fraction_digits
    }

    pub fn minor_unit_divisor(&self) -> u32 {
        self.metadata.minor_unit_divisor
    }

    /// Full metadata snapshot.
    pub fn metadata(&self) -> &CurrencyMetadata {
        &self.metadata
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.metadata.code == other.metadata.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metadata.code.hash(state);
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Currency::new(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}
