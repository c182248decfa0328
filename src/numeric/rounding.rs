// ============================================================================
// Rounding Modes
// Tie-breaking rules applied when a decimal result is narrowed
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a value exactly halfway between two representable values is resolved.
///
/// Values that are not on a midpoint always round to the nearest neighbour,
/// whatever the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Ties away from zero: 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfUp,
    /// Ties toward zero: 2.5 -> 2, -2.5 -> -2
    HalfDown,
    /// Ties to the even neighbour: 2.5 -> 2, 3.5 -> 4
    HalfEven,
    /// Ties to the odd neighbour: 2.5 -> 3, 3.5 -> 3
    HalfOdd,
}

impl RoundingMode {
    /// Every supported mode, in numeric-code order.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ];

    /// Round `value` to `dp` decimal places.
    pub fn round_dp(self, value: Decimal, dp: u32) -> Decimal {
        match self {
            RoundingMode::HalfUp => {
                value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            },
            RoundingMode::HalfDown => {
                value.round_dp_with_strategy(dp, RoundingStrategy::MidpointTowardZero)
            },
            RoundingMode::HalfEven => {
                value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            },
            RoundingMode::HalfOdd => round_half_odd(value, dp),
        }
    }

    /// Round `value` to a whole number and narrow it to `i64`.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value is outside the `i64` range.
    pub fn round_to_i64(self, value: Decimal) -> MoneyResult<i64> {
        self.round_dp(value, 0).to_i64().ok_or_else(|| {
            tracing::trace!(%value, mode = %self, "rounded value outside i64 range");
            MoneyError::Overflow
        })
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfDown => "half_down",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfOdd => "half_odd",
        }
    }
}

/// Ties go to whichever neighbour has an odd last digit.
///
/// On a midpoint the truncated value is kept when it is already odd, otherwise
/// the away-from-zero neighbour is odd and ordinary half-up rounding picks it.
fn round_half_odd(value: Decimal, dp: u32) -> Decimal {
    if dp >= value.scale() {
        return value;
    }

    let truncated = value.round_dp_with_strategy(dp, RoundingStrategy::ToZero);
    let remainder = (value - truncated).abs();
    let on_midpoint = remainder == Decimal::new(5, dp + 1);

    // Fewer than `dp` fractional digits means the digit at `dp` is a zero.
    let truncated_is_odd = truncated.scale() == dp && truncated.mantissa() % 2 != 0;

    if on_midpoint && truncated_is_odd {
        truncated
    } else {
        value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// `numerator / denominator` rounded half-up on unsigned magnitudes.
///
/// Callers reapply the sign, which makes the tie go away from zero.
pub(crate) fn div_half_up(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder >= denominator - remainder {
        quotient + 1
    } else {
        quotient
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    /// Accepts `half_up`, `half-up` or `HALF_UP` style spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_down" => Ok(RoundingMode::HalfDown),
            "half_even" => Ok(RoundingMode::HalfEven),
            "half_odd" => Ok(RoundingMode::HalfOdd),
            _ => Err(MoneyError::invalid(format!(
                "unrecognized rounding mode \"{}\"",
                s
            ))),
        }
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = MoneyError;

    /// Numeric codes 1-4 in the classic `ROUND_HALF_*` order.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RoundingMode::HalfUp),
            2 => Ok(RoundingMode::HalfDown),
            3 => Ok(RoundingMode::HalfEven),
            4 => Ok(RoundingMode::HalfOdd),
            _ => Err(MoneyError::invalid(format!(
                "unrecognized rounding mode code {}",
                code
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use rust_decimal_macros::dec;

    fn round_all(value: Decimal, dp: u32) -> [Decimal; 4] {
        RoundingMode::ALL.map(|mode| mode.round_dp(value, dp))
    }

    #[test]
    fn test_integer_midpoints() {
        assert_eq!(round_all(dec!(2.5), 0), [dec!(3), dec!(2), dec!(2), dec!(3)]);
        assert_eq!(round_all(dec!(-2.5), 0), [dec!(-3), dec!(-2), dec!(-2), dec!(-3)]);
        assert_eq!(round_all(dec!(3.5), 0), [dec!(4), dec!(3), dec!(4), dec!(3)]);
        assert_eq!(round_all(dec!(-3.5), 0), [dec!(-4), dec!(-3), dec!(-4), dec!(-3)]);
        assert_eq!(round_all(dec!(0.5), 0), [dec!(1), dec!(0), dec!(0), dec!(1)]);
    }

    #[test]
    fn test_non_midpoints_round_to_nearest() {
        assert_eq!(round_all(dec!(2.4), 0), [dec!(2); 4]);
        assert_eq!(round_all(dec!(2.6), 0), [dec!(3); 4]);
        assert_eq!(round_all(dec!(-2.51), 0), [dec!(-3); 4]);
    }

    #[test]
    fn test_fractional_midpoints() {
        assert_eq!(
            round_all(dec!(1.235), 2),
            [dec!(1.24), dec!(1.23), dec!(1.24), dec!(1.23)]
        );
        assert_eq!(
            round_all(dec!(1.245), 2),
            [dec!(1.25), dec!(1.24), dec!(1.24), dec!(1.25)]
        );
        // 1.205 truncates to 1.20 (trailing zero, even digit)
        assert_eq!(RoundingMode::HalfOdd.round_dp(dec!(1.205), 2), dec!(1.21));
    }

    #[test]
    fn test_already_at_precision_is_untouched() {
        assert_eq!(RoundingMode::HalfOdd.round_dp(dec!(12.3), 2), dec!(12.3));
        assert_eq!(RoundingMode::HalfUp.round_dp(dec!(7), 0), dec!(7));
    }

    #[test]
    fn test_round_to_i64() {
        assert_eq!(RoundingMode::HalfUp.round_to_i64(dec!(1249.5)), Ok(1250));
        assert_eq!(RoundingMode::HalfEven.round_to_i64(dec!(1249.5)), Ok(1250));
        assert_eq!(RoundingMode::HalfDown.round_to_i64(dec!(1249.5)), Ok(1249));

        let too_big = Decimal::from(i64::MAX) + dec!(1);
        assert_eq!(
            RoundingMode::HalfUp.round_to_i64(too_big),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_div_half_up() {
        assert_eq!(div_half_up(615, 100), 6);
        assert_eq!(div_half_up(650, 100), 7);
        assert_eq!(div_half_up(649, 100), 6);
        assert_eq!(div_half_up(7, 1), 7);
        assert_eq!(div_half_up(u128::MAX, u128::MAX), 1);
        assert_eq!(div_half_up(u128::MAX / 2, u128::MAX), 0);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("half_up".parse::<RoundingMode>(), Ok(RoundingMode::HalfUp));
        assert_eq!("Half-Even".parse::<RoundingMode>(), Ok(RoundingMode::HalfEven));
        assert_eq!("HALF_ODD".parse::<RoundingMode>(), Ok(RoundingMode::HalfOdd));

        let err = "ceiling".parse::<RoundingMode>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_numeric_codes() {
        for (code, mode) in (1..=4).zip(RoundingMode::ALL) {
            assert_eq!(RoundingMode::try_from(code), Ok(mode));
        }
        assert!(RoundingMode::try_from(0).is_err());
        assert!(RoundingMode::try_from(5).is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.to_string().parse::<RoundingMode>(), Ok(mode));
        }
    }

    quickcheck! {
        fn modes_agree_off_midpoint(mantissa: i64, scale: u8) -> TestResult {
            let value = Decimal::new(mantissa, u32::from(scale % 6) + 1);
            let fraction = (value - value.trunc()).abs();
            if fraction == dec!(0.5) {
                return TestResult::discard();
            }
            let rounded = round_all(value, 0);
            TestResult::from_bool(rounded.iter().all(|r| *r == rounded[0]))
        }
    }
}
