// ============================================================================
// Money Domain Model
// Fixed-point monetary value over a currency's smallest unit
// ============================================================================

use super::currency::Currency;
use crate::allocation::{EvenSplit, RatioSplit};
use crate::interfaces::{AllocationStrategy, MoneyFormatter, PlainFormatter};
use crate::numeric::{div_half_up, MoneyError, MoneyResult, RoundingMode};
use crate::registry::CurrencyRegistry;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary value stored as a whole number of minor units.
///
/// `Money::new(1050, usd)` is 10.50 USD. Values are immutable: every
/// operation returns a new `Money` and leaves its operands untouched.
/// Operations combining two values require the same currency, and every
/// result outside the `i64` range is reported as `Overflow` rather than
/// wrapped or truncated.
///
/// # Example
/// ```
/// use money::domain::Money;
/// use money::numeric::RoundingMode;
/// use rust_decimal::Decimal;
///
/// let price = Money::from_code(1999, "EUR").unwrap();
/// let doubled = price.multiply(Decimal::from(2), RoundingMode::HalfUp).unwrap();
/// assert_eq!(doubled.amount(), 3998);
///
/// let shares = doubled.allocate_to_targets(3).unwrap();
/// let amounts: Vec<i64> = shares.iter().map(|m| m.amount()).collect();
/// assert_eq!(amounts, vec![1333, 1333, 1332]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "MoneySnapshot", try_from = "MoneySnapshot")
)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

// ============================================================================
// Construction
// ============================================================================

impl Money {
    /// Create from an amount already expressed in minor units.
    #[inline]
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency.
    #[inline]
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Create from minor units and a currency code looked up in the global
    /// registry.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn from_code(amount: i64, code: &str) -> MoneyResult<Self> {
        Ok(Self::new(amount, Currency::new(code)?))
    }

    /// Create from a decimal count of minor units that must be whole.
    ///
    /// # Errors
    /// - `InvalidArgument` if `amount` has a fractional part
    /// - `Overflow` if it is outside the `i64` range
    pub fn from_decimal_minor_units(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        if !amount.fract().is_zero() {
            return Err(MoneyError::invalid(format!(
                "minor-unit amount must be an integer, got {}",
                amount
            )));
        }

        let amount = amount.to_i64().ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, currency))
    }

    /// Parse a major-unit decimal string such as `"12.34"`.
    ///
    /// The value is first rounded half-up to the currency's default fraction
    /// digits, then scaled by the minor-unit divisor and rounded half-up to a
    /// whole number of minor units. For EUR, `"12.345"` becomes 12.35 and
    /// then 1235.
    ///
    /// # Errors
    /// - `InvalidArgument` if `value` is not a plain decimal numeral
    /// - `Overflow` if the result does not fit in `i64`
    pub fn from_decimal_str(value: &str, currency: Currency) -> MoneyResult<Self> {
        let numeral = DecimalNumeral::parse(value)?;
        let amount = numeral.to_minor_units(
            u32::from(currency.default_fraction_digits()),
            currency.minor_unit_divisor(),
        )?;

        Ok(Self::new(amount, currency))
    }

    /// Rebuild a value from its structural snapshot.
    pub fn from_snapshot(snapshot: MoneySnapshot, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        Ok(Self::new(snapshot.amount, registry.currency(&snapshot.currency)?))
    }

    #[inline]
    fn with_amount(&self, amount: i64) -> Self {
        Self::new(amount, self.currency.clone())
    }

    /// Same amount, different denomination.
    pub(crate) fn in_currency(self, currency: Currency) -> Self {
        Self::new(self.amount, currency)
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Money {
    /// Amount in minor units.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Amount in major units, rounded half-up to the currency's default
    /// fraction digits.
    ///
    /// The result always carries exactly that many fraction digits.
    pub fn converted_amount(&self) -> Decimal {
        let digits = u32::from(self.currency.default_fraction_digits());
        let divisor = self.currency.minor_unit_divisor();

        // At most 2^63 * 10^18, well inside i128
        let scaled = u128::from(self.amount.unsigned_abs()) * 10u128.pow(digits);
        let magnitude = div_half_up(scaled, u128::from(divisor)) as i128;
        let signed = if self.amount < 0 { -magnitude } else { magnitude };

        // Validated metadata keeps the mantissa in range; see CurrencyMetadata::validate
        Decimal::try_from_i128_with_scale(signed, digits).unwrap_or_else(|_| {
            let major = Decimal::from(self.amount) / Decimal::from(divisor);
            RoundingMode::HalfUp.round_dp(major, digits)
        })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Structural `{amount, currency}` projection.
    pub fn snapshot(&self) -> MoneySnapshot {
        MoneySnapshot {
            amount: self.amount,
            currency: self.currency.code().to_string(),
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Money {
    /// Checked addition.
    ///
    /// # Errors
    /// `CurrencyMismatch` for different currencies, `Overflow` if the sum is
    /// out of range.
    pub fn add(&self, other: &Money) -> MoneyResult<Money> {
        self.assert_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or_else(|| overflow("add", self.amount, other.amount))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// `CurrencyMismatch` for different currencies, `Overflow` if the
    /// difference is out of range.
    pub fn subtract(&self, other: &Money) -> MoneyResult<Money> {
        self.assert_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or_else(|| overflow("subtract", self.amount, other.amount))
    }

    /// Additive inverse.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`, whose inverse is not representable.
    pub fn negate(&self) -> MoneyResult<Money> {
        self.amount
            .checked_neg()
            .map(|amount| self.with_amount(amount))
            .ok_or_else(|| overflow("negate", self.amount, -1))
    }

    /// Multiply by a decimal factor and round to whole minor units.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded product is out of range.
    pub fn multiply(&self, factor: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        mode.round_to_i64(product).map(|amount| self.with_amount(amount))
    }

    /// Exact multiplication by an integer.
    pub fn multiply_int(&self, factor: i64) -> MoneyResult<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| self.with_amount(amount))
            .ok_or_else(|| overflow("multiply", self.amount, factor))
    }

    /// Divide by a decimal divisor and round to whole minor units.
    ///
    /// # Errors
    /// - `InvalidArgument` if `divisor` is zero
    /// - `Overflow` if the rounded quotient is out of range
    pub fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        if divisor.is_zero() {
            return Err(MoneyError::invalid("division by zero"));
        }

        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        mode.round_to_i64(quotient).map(|amount| self.with_amount(amount))
    }
}

// ============================================================================
// Allocation
// ============================================================================

/// Result of `Money::extract_percentage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageExtraction {
    /// The percentage that was contained in the original amount
    pub percentage: Money,

    /// Original amount minus `percentage`
    pub subtotal: Money,
}

impl Money {
    /// Split the amount with an allocation strategy.
    ///
    /// The shares always sum to exactly `self.amount()`.
    pub fn allocate<S>(&self, strategy: &S) -> MoneyResult<Vec<Money>>
    where
        S: AllocationStrategy + ?Sized,
    {
        let shares = strategy.allocate(self.amount)?;
        debug_assert_eq!(shares.len(), strategy.share_count());
        tracing::trace!(
            strategy = strategy.name(),
            amount = self.amount,
            shares = shares.len(),
            "amount allocated"
        );
        Ok(shares
            .into_iter()
            .map(|amount| self.with_amount(amount))
            .collect())
    }

    /// Split into `n` shares differing by at most one minor unit; the first
    /// `|amount| % n` shares get the extra unit.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `n` is zero.
    pub fn allocate_to_targets(&self, n: usize) -> MoneyResult<Vec<Money>> {
        self.allocate(&EvenSplit::new(n)?)
    }

    /// Split proportionally to `ratios`; leftover units go to the leading
    /// shares one at a time.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `ratios` is empty or contains a ratio that
    /// is not positive.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
        self.allocate(&RatioSplit::new(ratios)?)
    }

    /// Split an amount that already includes a percentage markup into the
    /// markup and the subtotal.
    ///
    /// The markup is `round(amount / (100 + percentage) * percentage)`; use
    /// `multiply` instead to compute a percentage *of* an amount.
    ///
    /// # Errors
    /// - `InvalidArgument` if `percentage` is -100
    /// - `Overflow` if an intermediate result is out of range
    pub fn extract_percentage(
        &self,
        percentage: Decimal,
        mode: RoundingMode,
    ) -> MoneyResult<PercentageExtraction> {
        let gross = Decimal::ONE_HUNDRED
            .checked_add(percentage)
            .ok_or(MoneyError::Overflow)?;
        if gross.is_zero() {
            return Err(MoneyError::invalid("percentage of -100 has no base amount"));
        }

        let share = Decimal::from(self.amount)
            .checked_div(gross)
            .and_then(|unit| unit.checked_mul(percentage))
            .ok_or(MoneyError::Overflow)?;

        let percentage = self.with_amount(mode.round_to_i64(share)?);
        let subtotal = self.subtract(&percentage)?;

        Ok(PercentageExtraction {
            percentage,
            subtotal,
        })
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Money {
    /// Three-way comparison of two same-currency values.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare_to(&self, other: &Money) -> MoneyResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn equals(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    fn assert_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency == other.currency {
            return Ok(());
        }

        tracing::trace!(
            expected = self.currency.code(),
            found = other.currency.code(),
            "currency mismatch"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency.code().to_string(),
            found: other.currency.code().to_string(),
        })
    }
}

fn overflow(operation: &str, lhs: i64, rhs: i64) -> MoneyError {
    tracing::trace!(operation, lhs, rhs, "money arithmetic overflow");
    MoneyError::Overflow
}

/// A `[+-]digits[.digits]` numeral with at least one digit; no exponents,
/// separators or whitespace inside the number.
struct DecimalNumeral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalNumeral<'a> {
    fn parse(value: &'a str) -> MoneyResult<Self> {
        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty())
            || !all_digits(integer)
            || !all_digits(fraction)
        {
            return Err(MoneyError::invalid(format!(
                "\"{}\" is not a decimal number",
                value
            )));
        }

        Ok(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// Round half-up to `digits` places, scale by `divisor`, then round
    /// half-up to a whole number of minor units.
    ///
    /// Works on the digit string itself, so numerals of any length round
    /// exactly: the first stage only depends on the digit after `digits`.
    /// Any intermediate that leaves `u128` is far beyond the `i64` range.
    fn to_minor_units(&self, digits: u32, divisor: u32) -> MoneyResult<i64> {
        let places = digits as usize;
        let kept = self.fraction.get(..places).unwrap_or(self.fraction);
        let round_up = self
            .fraction
            .as_bytes()
            .get(places)
            .is_some_and(|&digit| digit >= b'5');

        let padding = std::iter::repeat(b'0').take(places - kept.len());
        let mut scaled: u128 = 0;
        for digit in self.integer.bytes().chain(kept.bytes()).chain(padding) {
            scaled = scaled
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(digit - b'0')))
                .ok_or(MoneyError::Overflow)?;
        }
        if round_up {
            scaled = scaled.checked_add(1).ok_or(MoneyError::Overflow)?;
        }

        let product = scaled
            .checked_mul(u128::from(divisor))
            .ok_or(MoneyError::Overflow)?;
        let magnitude = i128::try_from(div_half_up(product, 10u128.pow(digits)))
            .map_err(|_| MoneyError::Overflow)?;
        let signed = if self.negative { -magnitude } else { magnitude };

        i64::try_from(signed).map_err(|_| {
            tracing::trace!(value = %signed, "parsed amount outside i64 range");
            MoneyError::Overflow
        })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Money {
    /// `None` when the currencies differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PlainFormatter.format(self))
    }
}

// ============================================================================
// Serialization Projection
// ============================================================================

/// Structural snapshot of a `Money` value: `{"amount": 1, "currency": "EUR"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneySnapshot {
    /// Amount in minor units
    pub amount: i64,

    /// Currency code
    pub currency: String,
}

impl From<Money> for MoneySnapshot {
    fn from(money: Money) -> Self {
        money.snapshot()
    }
}

impl TryFrom<MoneySnapshot> for Money {
    type Error = MoneyError;

    /// Resolves the currency through the global registry.
    fn try_from(snapshot: MoneySnapshot) -> Result<Self, Self::Error> {
        Money::from_snapshot(snapshot, CurrencyRegistry::global())
    }
}

// ============================================================================
// Tests
// ============================================================================
