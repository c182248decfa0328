// ============================================================================
// Allocation Strategy Interface
// Defines the contract for sum-preserving amount splitting
// ============================================================================

use crate::numeric::MoneyResult;

/// Strategy pattern interface for allocation algorithms
/// Implementations: EvenSplit (N targets), RatioSplit (weighted)
///
/// Strategies work on raw minor-unit integers; `Money::allocate` wraps the
/// shares back into the caller's currency.
pub trait AllocationStrategy: Send + Sync {
    /// Split `amount` into shares
    ///
    /// # Returns
    /// Shares in order; their sum is exactly `amount` and each carries the
    /// sign of `amount` (or is zero)
    fn allocate(&self, amount: i64) -> MoneyResult<Vec<i64>>;

    /// Number of shares `allocate` produces
    fn share_count(&self) -> usize;

    /// Get the strategy name for logging
    fn name(&self) -> &str;
}
