// ============================================================================
// Logging Setup
// fmt subscriber driven by RMB_UPPERCASE_LOG
// ============================================================================

/// Environment variable holding the filter directive, e.g. `rmb_uppercase=debug`
pub const LOG_ENV: &str = "RMB_UPPERCASE_LOG";

/// Install a global fmt subscriber.
///
/// Defaults to `warn` when the variable is unset or unparsable. Safe to call
/// more than once: later calls leave the first subscriber in place.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}
