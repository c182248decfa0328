// ============================================================================
// Even Split Allocation
// Divides an amount across N targets, spreading the remainder from the front
// ============================================================================

use super::apply_sign;
use crate::interfaces::AllocationStrategy;
use crate::numeric::{MoneyError, MoneyResult};

/// Even split across a fixed number of targets
///
/// # Example
/// ```text
/// Amount: 99, targets: 10
///   base share = 99 / 10 = 9, remainder = 9
///   shares 0..9 get 10, share 9 gets 9
///   sum = 9 * 10 + 9 = 99
/// ```
///
/// Negative amounts are split by magnitude and every share takes the sign,
/// so -99 yields nine -10s and one -9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvenSplit {
    targets: usize,
}

impl EvenSplit {
    /// # Errors
    /// Returns `InvalidArgument` if `targets` is zero.
    pub fn new(targets: usize) -> MoneyResult<Self> {
        if targets == 0 {
            return Err(MoneyError::invalid(
                "number of allocation targets must be a positive integer",
            ));
        }
        Ok(Self { targets })
    }

    pub fn targets(&self) -> usize {
        self.targets
    }
}

impl TryFrom<i64> for EvenSplit {
    type Error = MoneyError;

    fn try_from(targets: i64) -> Result<Self, Self::Error> {
        let targets = usize::try_from(targets).map_err(|_| {
            MoneyError::invalid(format!(
                "number of allocation targets must be a positive integer, got {}",
                targets
            ))
        })?;
        Self::new(targets)
    }
}

impl AllocationStrategy for EvenSplit {
    fn allocate(&self, amount: i64) -> MoneyResult<Vec<i64>> {
        let negative = amount < 0;
        let magnitude = amount.unsigned_abs();
        let targets = self.targets as u64;

        let base = magnitude / targets;
        let remainder = magnitude % targets;

        (0..targets)
            .map(|i| {
                let share = if i < remainder { base + 1 } else { base };
                apply_sign(u128::from(share), negative)
            })
            .collect()
    }

    fn share_count(&self) -> usize {
        self.targets
    }

    fn name(&self) -> &str {
        "EvenSplit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_split_with_remainder() {
        let split = EvenSplit::new(10).unwrap();
        let shares = split.allocate(99).unwrap();
        assert_eq!(shares, vec![10, 10, 10, 10, 10, 10, 10, 10, 10, 9]);
    }

    #[test]
    fn test_even_split_negative() {
        let split = EvenSplit::new(10).unwrap();
        let shares = split.allocate(-99).unwrap();
        assert_eq!(shares, vec![-10, -10, -10, -10, -10, -10, -10, -10, -10, -9]);
    }

    #[test]
    fn test_even_split_exact() {
        let split = EvenSplit::new(4).unwrap();
        assert_eq!(split.allocate(100).unwrap(), vec![25, 25, 25, 25]);
    }

    #[test]
    fn test_more_targets_than_units() {
        let split = EvenSplit::new(5).unwrap();
        assert_eq!(split.allocate(3).unwrap(), vec![1, 1, 1, 0, 0]);
        assert_eq!(split.allocate(0).unwrap(), vec![0; 5]);
    }

    #[test]
    fn test_single_target_keeps_extremes() {
        let split = EvenSplit::new(1).unwrap();
        assert_eq!(split.allocate(i64::MIN).unwrap(), vec![i64::MIN]);
        assert_eq!(split.allocate(i64::MAX).unwrap(), vec![i64::MAX]);
    }

    #[test]
    fn test_invalid_target_counts() {
        assert!(EvenSplit::new(0).unwrap_err().is_invalid_argument());
        assert!(EvenSplit::try_from(-3).is_err());
        assert!(EvenSplit::try_from(0).is_err());
        assert_eq!(EvenSplit::try_from(3).unwrap().targets(), 3);
    }

    proptest! {
        #[test]
        fn prop_even_split_conserves_amount(amount in any::<i64>(), targets in 1usize..64) {
            let split = EvenSplit::new(targets).unwrap();
            let shares = split.allocate(amount).unwrap();

            prop_assert_eq!(shares.len(), targets);
            let total: i128 = shares.iter().map(|&s| i128::from(s)).sum();
            prop_assert_eq!(total, i128::from(amount));

            let max = shares.iter().map(|s| s.unsigned_abs()).max().unwrap();
            let min = shares.iter().map(|s| s.unsigned_abs()).min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
