// ============================================================================
// Logging Setup
// Installs a fmt subscriber for the crate's tracing output
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use tracing::Level;

/// Install a global `tracing` subscriber printing events up to `level`.
///
/// Registry creation and configuration are logged at `DEBUG`; rejected
/// operations (overflow, currency mismatch) at `TRACE`.
///
/// # Errors
/// Returns `InvalidArgument` if a global subscriber is already installed.
pub fn init_logging(level: Level) -> MoneyResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| MoneyError::invalid(format!("logging already initialized: {}", e)))
}
