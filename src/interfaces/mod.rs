// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod allocation_strategy;
mod formatter;

pub use allocation_strategy::AllocationStrategy;
pub use formatter::{MoneyFormatter, PlainFormatter};
