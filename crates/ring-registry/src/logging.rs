//! Process-wide tracing setup.
//!
//! The registry is a library; the embedding application decides when
//! logging starts and calls [`init`] once from its entry point.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG`, defaulting to `info`. Subsequent calls
/// are no-ops, so tests and embedding applications cannot clash over the
/// global subscriber.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
