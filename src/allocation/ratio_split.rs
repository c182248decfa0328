// ============================================================================
// Ratio Split Allocation
// Divides an amount proportionally to a list of positive weights
// ============================================================================

use super::apply_sign;
use crate::interfaces::AllocationStrategy;
use crate::numeric::{MoneyError, MoneyResult};
use ethnum::U256;
use rust_decimal::Decimal;

/// Proportional split by ratios
///
/// # Example
/// ```text
/// Amount: 5, ratios: [3, 7], total weight 10
///   share 0 = floor(5 * 3 / 10) = 1
///   share 1 = floor(5 * 7 / 10) = 3
///   leftover = 5 - 4 = 1, given to share 0
///   result = [2, 3]
/// ```
///
/// Ratios are normalized to integer weights at a common scale and reduced by
/// their gcd, so decimal ratios such as `0.3` and `0.7` split exactly like
/// `3` and `7`. Weights and products are 256-bit: a 96-bit mantissa raised
/// by up to 28 decimal places, times a 64-bit amount, always fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioSplit {
    ratios: Vec<Decimal>,
    weights: Vec<U256>,
    total_weight: U256,
}

impl RatioSplit {
    /// # Errors
    /// Returns `InvalidArgument` if `ratios` is empty or any ratio is not
    /// positive.
    pub fn new(ratios: &[Decimal]) -> MoneyResult<Self> {
        if ratios.is_empty() {
            return Err(MoneyError::invalid("at least one ratio is required"));
        }

        if let Some(bad) = ratios.iter().find(|r| **r <= Decimal::ZERO) {
            return Err(MoneyError::invalid(format!(
                "ratios must be positive, got {}",
                bad
            )));
        }

        let scale = ratios.iter().map(Decimal::scale).max().unwrap_or(0);

        // Scales never exceed 28, so the factor fits in u128
        let weights = ratios
            .iter()
            .map(|ratio| {
                let factor = U256::from(10u128.pow(scale - ratio.scale()));
                U256::from(ratio.mantissa().unsigned_abs())
                    .checked_mul(factor)
                    .ok_or(MoneyError::Overflow)
            })
            .collect::<MoneyResult<Vec<U256>>>()?;

        let divisor = weights.iter().copied().fold(U256::ZERO, gcd);
        let weights: Vec<U256> = weights.into_iter().map(|w| w / divisor).collect();

        let total_weight = weights
            .iter()
            .try_fold(U256::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or(MoneyError::Overflow)?;

        Ok(Self {
            ratios: ratios.to_vec(),
            weights,
            total_weight,
        })
    }

    pub fn ratios(&self) -> &[Decimal] {
        &self.ratios
    }
}

fn gcd(mut a: U256, mut b: U256) -> U256 {
    while b != U256::ZERO {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl AllocationStrategy for RatioSplit {
    fn allocate(&self, amount: i64) -> MoneyResult<Vec<i64>> {
        let negative = amount < 0;
        let magnitude = amount.unsigned_abs();
        let wide_magnitude = U256::from(magnitude);

        let mut shares = self
            .weights
            .iter()
            .map(|weight| {
                let share = wide_magnitude
                    .checked_mul(*weight)
                    .map(|scaled| scaled / self.total_weight)
                    .ok_or(MoneyError::Overflow)?;
                if share > wide_magnitude {
                    tracing::trace!(amount, weight = %weight, "ratio share exceeds amount");
                    return Err(MoneyError::Overflow);
                }
                Ok(share.as_u64())
            })
            .collect::<MoneyResult<Vec<u64>>>()?;

        // Each floor drops less than one unit, so leftover < shares.len()
        let allocated: u128 = shares.iter().map(|&s| u128::from(s)).sum();
        let leftover = (u128::from(magnitude) - allocated) as usize;
        for share in shares.iter_mut().take(leftover) {
            *share += 1;
        }

        shares
            .into_iter()
            .map(|share| apply_sign(u128::from(share), negative))
            .collect()
    }

    fn share_count(&self) -> usize {
        self.weights.len()
    }

    fn name(&self) -> &str {
        "RatioSplit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_split() {
        let split = RatioSplit::new(&[dec!(3), dec!(7)]).unwrap();
        assert_eq!(split.allocate(5).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_ratio_split_negative() {
        let split = RatioSplit::new(&[dec!(3), dec!(7)]).unwrap();
        assert_eq!(split.allocate(-5).unwrap(), vec![-2, -3]);
    }

    #[test]
    fn test_decimal_ratios_match_integer_ratios() {
        let decimal = RatioSplit::new(&[dec!(0.3), dec!(0.7)]).unwrap();
        let integer = RatioSplit::new(&[dec!(3), dec!(7)]).unwrap();
        assert_eq!(decimal.allocate(1001).unwrap(), integer.allocate(1001).unwrap());
    }

    #[test]
    fn test_mixed_scales() {
        let split = RatioSplit::new(&[dec!(1), dec!(0.5), dec!(0.25)]).unwrap();
        // Weights 100, 50, 25 of 175
        assert_eq!(split.allocate(175).unwrap(), vec![100, 50, 25]);
        assert_eq!(split.allocate(100).unwrap(), vec![58, 28, 14]);
    }

    #[test]
    fn test_leftover_goes_to_leading_shares() {
        let split = RatioSplit::new(&[dec!(1), dec!(1), dec!(1)]).unwrap();
        assert_eq!(split.allocate(100).unwrap(), vec![34, 33, 33]);
        assert_eq!(split.allocate(2).unwrap(), vec![1, 1, 0]);
    }

    #[test]
    fn test_extreme_amounts() {
        let split = RatioSplit::new(&[dec!(1), dec!(1)]).unwrap();
        let shares = split.allocate(i64::MIN).unwrap();
        assert_eq!(shares, vec![i64::MIN / 2, i64::MIN / 2]);

        let shares = split.allocate(i64::MAX).unwrap();
        assert_eq!(shares, vec![i64::MAX / 2 + 1, i64::MAX / 2]);
    }

    #[test]
    fn test_thirds_at_large_amounts() {
        let third = dec!(1) / dec!(3);
        let split = RatioSplit::new(&[third; 3]).unwrap();
        assert_eq!(
            split.allocate(1_000_000_000_000).unwrap(),
            vec![333_333_333_334, 333_333_333_333, 333_333_333_333]
        );
    }

    #[test]
    fn test_full_precision_ratios_at_large_amounts() {
        let split = RatioSplit::new(&[
            dec!(0.3333333333333333333333333333),
            dec!(0.6666666666666666666666666667),
        ])
        .unwrap();
        assert_eq!(
            split.allocate(100_000_000_000).unwrap(),
            vec![33_333_333_334, 66_666_666_666]
        );
    }

    #[test]
    fn test_widest_ratio_spread() {
        let split = RatioSplit::new(&[Decimal::MAX, Decimal::new(1, 28)]).unwrap();
        assert_eq!(split.allocate(i64::MAX).unwrap(), vec![i64::MAX, 0]);
        assert_eq!(split.allocate(i64::MIN).unwrap(), vec![i64::MIN, 0]);
    }

    #[test]
    fn test_weights_are_reduced() {
        let split = RatioSplit::new(&[dec!(0.50), dec!(0.25)]).unwrap();
        assert_eq!(split.weights, vec![U256::from(2u32), U256::from(1u32)]);
        assert_eq!(split.total_weight, U256::from(3u32));
    }

    #[test]
    fn test_invalid_ratios() {
        assert!(RatioSplit::new(&[]).unwrap_err().is_invalid_argument());
        assert!(RatioSplit::new(&[dec!(1), dec!(0)]).is_err());
        assert!(RatioSplit::new(&[dec!(-1), dec!(2)]).is_err());
    }

    proptest! {
        #[test]
        fn prop_ratio_split_conserves_amount(
            amount in any::<i64>(),
            ratios in prop::collection::vec(1u32..1000, 1..12),
        ) {
            let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();
            let split = RatioSplit::new(&ratios).unwrap();
            let shares = split.allocate(amount).unwrap();

            prop_assert_eq!(shares.len(), ratios.len());
            let total: i128 = shares.iter().map(|&s| i128::from(s)).sum();
            prop_assert_eq!(total, i128::from(amount));
            prop_assert!(shares.iter().all(|&s| s == 0 || (s < 0) == (amount < 0)));
        }

        #[test]
        fn prop_high_scale_ratios_conserve_amount(
            amount in any::<i64>(),
            ratios in prop::collection::vec((1i64..=i64::MAX, 0u32..=28), 1..12),
        ) {
            let ratios: Vec<Decimal> = ratios
                .into_iter()
                .map(|(mantissa, scale)| Decimal::new(mantissa, scale))
                .collect();
            let split = RatioSplit::new(&ratios).unwrap();
            let shares = split.allocate(amount).unwrap();

            prop_assert_eq!(shares.len(), ratios.len());
            let total: i128 = shares.iter().map(|&s| i128::from(s)).sum();
            prop_assert_eq!(total, i128::from(amount));
        }
    }
}
