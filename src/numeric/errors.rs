// ============================================================================
// Money Errors
// Error types shared by the registry, money arithmetic and currency pairs
// ============================================================================

use thiserror::Error;

/// Errors raised by money construction, arithmetic and currency lookups.
///
/// Every error is deterministic: the same inputs always produce the same
/// error, and nothing is retried, clamped or partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoneyError {
    /// Malformed input at an API boundary
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Currency code absent from the registry
    #[error("unknown currency code \"{0}\"")]
    UnknownCurrency(String),

    /// Two operands are denominated in different currencies
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Result does not fit in the signed 64-bit minor-unit range
    #[error("arithmetic overflow: result outside the representable integer range")]
    Overflow,
}

impl MoneyError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        MoneyError::InvalidArgument(message.into())
    }

    /// `UnknownCurrency` is a specialised invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MoneyError::InvalidArgument(_) | MoneyError::UnknownCurrency(_)
        )
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result outside the representable integer range"
        );
        assert_eq!(
            MoneyError::UnknownCurrency("ZZZ".to_string()).to_string(),
            "unknown currency code \"ZZZ\""
        );
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: "EUR".to_string(),
                found: "USD".to_string(),
            }
            .to_string(),
            "currency mismatch: expected EUR, found USD"
        );
    }

    #[test]
    fn test_unknown_currency_is_invalid_argument() {
        assert!(MoneyError::UnknownCurrency("ZZZ".to_string()).is_invalid_argument());
        assert!(MoneyError::invalid("bad").is_invalid_argument());
        assert!(!MoneyError::Overflow.is_invalid_argument());
    }
}
