// ============================================================================
// Numeric Module
// Error types and rounding rules for exact money arithmetic
// ============================================================================
//
// This module provides:
// - MoneyError: Error kinds for every fallible money operation
// - RoundingMode: Tie-breaking rules used when narrowing decimals to integers
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Minor-unit amounts are i64; wider intermediates are bounds-checked

mod errors;
mod rounding;

pub use errors::{MoneyError, MoneyResult};
pub use rounding::RoundingMode;
pub(crate) use rounding::div_half_up;
