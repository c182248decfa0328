// ============================================================================
// Allocation Module
// Sum-preserving algorithms for splitting minor-unit amounts
// ============================================================================

mod even_split;
mod ratio_split;

pub use even_split::EvenSplit;
pub use ratio_split::RatioSplit;

use crate::numeric::{MoneyError, MoneyResult};

/// Reapply the sign of the original amount to an unsigned share.
fn apply_sign(share: u128, negative: bool) -> MoneyResult<i64> {
    let share = i128::try_from(share).map_err(|_| MoneyError::Overflow)?;
    let signed = if negative { -share } else { share };
    i64::try_from(signed).map_err(|_| MoneyError::Overflow)
}
