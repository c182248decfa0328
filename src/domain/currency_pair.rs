// ============================================================================
// Currency Pair
// Fixed-quote conversion between a base and a counter currency
// ============================================================================

use super::currency::Currency;
use super::money::Money;
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use crate::registry::CurrencyRegistry;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// `EUR/USD 1.2500`, `EUR-USD 1.2500` or `EURUSD 1.2500`
const PAIR_PATTERN: &str = r"^([A-Za-z]{3})[/-]?([A-Za-z]{3})\s+([0-9]*\.?[0-9]+)$";

fn pair_regex() -> &'static Regex {
    static PAIR_REGEX: OnceLock<Regex> = OnceLock::new();
    PAIR_REGEX.get_or_init(|| Regex::new(PAIR_PATTERN).expect("currency pair pattern is valid"))
}

/// One unit of `base` is worth `quote` units of `counter`.
///
/// # Example
/// ```
/// use money::domain::{CurrencyPair, Money};
///
/// let pair: CurrencyPair = "EUR/USD 1.25".parse().unwrap();
/// let dollars = pair.convert_to_counter(&Money::from_code(1000, "EUR").unwrap()).unwrap();
///
/// assert_eq!(dollars.amount(), 1250);
/// assert_eq!(dollars.currency().code(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
    quote: Decimal,
}

impl CurrencyPair {
    /// # Errors
    /// Returns `InvalidArgument` unless `quote` is strictly positive.
    pub fn new(base: Currency, counter: Currency, quote: Decimal) -> MoneyResult<Self> {
        if quote <= Decimal::ZERO {
            return Err(MoneyError::invalid(format!(
                "conversion quote must be positive, got {}",
                quote
            )));
        }

        Ok(Self {
            base,
            counter,
            quote,
        })
    }

    /// Parse `"BASE/COUNTER quote"`, resolving both codes through `registry`.
    ///
    /// # Errors
    /// - `InvalidArgument` if the string does not match the pair format or
    ///   the quote is not positive
    /// - `UnknownCurrency` if either code is not registered
    pub fn parse_with(value: &str, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let captures = pair_regex().captures(value.trim()).ok_or_else(|| {
            MoneyError::invalid(format!("cannot parse \"{}\" as a currency pair", value))
        })?;

        let base = registry.currency(&captures[1])?;
        let counter = registry.currency(&captures[2])?;

        let quote_text = &captures[3];
        let quote = if quote_text.starts_with('.') {
            Decimal::from_str(&format!("0{}", quote_text))
        } else {
            Decimal::from_str(quote_text)
        }
        .map_err(|_| MoneyError::invalid(format!("quote \"{}\" is out of range", quote_text)))?;

        Self::new(base, counter, quote)
    }

    #[inline]
    pub fn base_currency(&self) -> &Currency {
        &self.base
    }

    #[inline]
    pub fn counter_currency(&self) -> &Currency {
        &self.counter
    }

    #[inline]
    pub fn quote(&self) -> Decimal {
        self.quote
    }

    /// Convert a base-currency amount into the counter currency, rounding
    /// half-up.
    pub fn convert_to_counter(&self, money: &Money) -> MoneyResult<Money> {
        self.convert_to_counter_with(money, RoundingMode::HalfUp)
    }

    /// # Errors
    /// - `CurrencyMismatch` unless `money` is in the base currency
    /// - `Overflow` if the converted amount is out of range
    pub fn convert_to_counter_with(&self, money: &Money, mode: RoundingMode) -> MoneyResult<Money> {
        self.expect_currency(money, &self.base)?;
        let converted = money.multiply(self.quote, mode)?;
        Ok(converted.in_currency(self.counter.clone()))
    }

    /// Convert a counter-currency amount back into the base currency,
    /// rounding half-up.
    pub fn convert_to_base(&self, money: &Money) -> MoneyResult<Money> {
        self.convert_to_base_with(money, RoundingMode::HalfUp)
    }

    /// # Errors
    /// - `CurrencyMismatch` unless `money` is in the counter currency
    /// - `Overflow` if the converted amount is out of range
    pub fn convert_to_base_with(&self, money: &Money, mode: RoundingMode) -> MoneyResult<Money> {
        self.expect_currency(money, &self.counter)?;
        let converted = money.divide(self.quote, mode)?;
        Ok(converted.in_currency(self.base.clone()))
    }

    /// The counter/base pair with the reciprocal quote.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let quote = Decimal::ONE
            .checked_div(self.quote)
            .ok_or(MoneyError::Overflow)?;
        Self::new(self.counter.clone(), self.base.clone(), quote.normalize())
    }

    fn expect_currency(&self, money: &Money, expected: &Currency) -> MoneyResult<()> {
        if money.currency() == expected {
            return Ok(());
        }

        Err(MoneyError::CurrencyMismatch {
            expected: expected.code().to_string(),
            found: money.currency().code().to_string(),
        })
    }
}

impl FromStr for CurrencyPair {
    type Err = MoneyError;

    /// Parses against the global registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, CurrencyRegistry::global())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.base, self.counter, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur_usd() -> CurrencyPair {
        CurrencyPair::new(
            Currency::new("EUR").unwrap(),
            Currency::new("USD").unwrap(),
            dec!(1.25),
        )
        .unwrap()
    }

    #[test]
    fn test_pair_pattern_compiles() {
        let pattern = pair_regex();
        assert!(pattern.is_match("EUR/USD 1.25"));
        assert!(pattern.is_match("eurusd .5"));
        assert!(!pattern.is_match("ABCD 0"));
    }

    #[test]
    fn test_convert_to_counter() {
        let eur = Money::from_code(1000, "EUR").unwrap();
        let usd = eur_usd().convert_to_counter(&eur).unwrap();

        assert_eq!(usd.amount(), 1250);
        assert_eq!(usd.currency().code(), "USD");
    }

    #[test]
    fn test_convert_to_base() {
        let usd = Money::from_code(1250, "USD").unwrap();
        let eur = eur_usd().convert_to_base(&usd).unwrap();

        assert_eq!(eur.amount(), 1000);
        assert_eq!(eur.currency().code(), "EUR");
    }

    #[test]
    fn test_conversion_rounding() {
        let pair = eur_usd();
        let eur = Money::from_code(2, "EUR").unwrap();

        // 2 * 1.25 = 2.5
        assert_eq!(pair.convert_to_counter(&eur).unwrap().amount(), 3);
        assert_eq!(
            pair.convert_to_counter_with(&eur, RoundingMode::HalfEven)
                .unwrap()
                .amount(),
            2
        );
    }

    #[test]
    fn test_conversion_requires_matching_leg() {
        let pair = eur_usd();
        let usd = Money::from_code(100, "USD").unwrap();
        let eur = Money::from_code(100, "EUR").unwrap();

        assert_eq!(
            pair.convert_to_counter(&usd),
            Err(MoneyError::CurrencyMismatch {
                expected: "EUR".to_string(),
                found: "USD".to_string(),
            })
        );
        assert!(matches!(
            pair.convert_to_base(&eur),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_quote_must_be_positive() {
        let eur = Currency::new("EUR").unwrap();
        let usd = Currency::new("USD").unwrap();

        assert!(CurrencyPair::new(eur.clone(), usd.clone(), Decimal::ZERO).is_err());
        assert!(CurrencyPair::new(eur, usd, dec!(-1.5)).is_err());
    }

    #[test]
    fn test_parse_formats() {
        for input in ["EUR/USD 1.2500", "EUR-USD 1.2500", "EURUSD 1.2500", "eur/usd  1.2500"] {
            let pair: CurrencyPair = input.parse().unwrap();
            assert_eq!(pair.base_currency().code(), "EUR");
            assert_eq!(pair.counter_currency().code(), "USD");
            assert_eq!(pair.quote(), dec!(1.25));
        }

        let pair: CurrencyPair = "GBP/JPY .5".parse().unwrap();
        assert_eq!(pair.quote(), dec!(0.5));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["ABCD 0", "EUR/USD", "EUR/USD abc", "EUR USD 1.25", "EUR/USD 1.25x", ""] {
            let err = input.parse::<CurrencyPair>().unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} should be rejected", input);
        }

        assert!("EUR/USD 0".parse::<CurrencyPair>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parse_unknown_currency() {
        assert_eq!(
            "EUR/ZZZ 1.0".parse::<CurrencyPair>(),
            Err(MoneyError::UnknownCurrency("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_parse_with_custom_registry() {
        let registry = CurrencyRegistry::new();
        registry
            .register(crate::domain::CurrencyMetadata::new("XTS", "Testing", 963, 2, 100))
            .unwrap();
        registry
            .register(crate::domain::CurrencyMetadata::new("XXX", "None", 999, 0, 1))
            .unwrap();

        let pair = CurrencyPair::parse_with("XTS/XXX 2", &registry).unwrap();
        assert_eq!(pair.base_currency().code(), "XTS");
        assert!(CurrencyPair::parse_with("EUR/USD 1.25", &registry).is_err());
    }

    #[test]
    fn test_display() {
        let pair: CurrencyPair = "EUR-USD 1.2500".parse().unwrap();
        assert_eq!(pair.to_string(), "EUR/USD 1.2500");
    }

    #[test]
    fn test_inverse() {
        let inverse = eur_usd().inverse().unwrap();
        assert_eq!(inverse.base_currency().code(), "USD");
        assert_eq!(inverse.counter_currency().code(), "EUR");
        assert_eq!(inverse.quote(), dec!(0.8));

        let usd = Money::from_code(1250, "USD").unwrap();
        assert_eq!(inverse.convert_to_counter(&usd).unwrap().amount(), 1000);
    }
}
