// ============================================================================
// Utilities Module
// Process-level helpers outside the conversion path
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, LOG_ENV};
