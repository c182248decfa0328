// ============================================================================
// Utilities Module
// Optional process-level helpers
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
