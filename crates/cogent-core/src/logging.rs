//! Logging initialization for CLI entry points.

use tracing_subscriber::EnvFilter;

/// Initialize JSON logging to stderr.
///
/// Hooks use stdout for the hook protocol, so all diagnostics go to
/// stderr. `quiet` defaults the filter to `warn`; otherwise `info`.
/// `COGENT_LOG` (falling back to `RUST_LOG`) overrides either default.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };

    let filter = EnvFilter::try_from_env("COGENT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(true);
        init_logging(false);
        init_logging(true);
    }
}
