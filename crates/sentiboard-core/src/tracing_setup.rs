//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Install a stderr `fmt` subscriber.
///
/// Filter directives come from `SENTIBOARD_LOG`, then `RUST_LOG`, then
/// `default_level`. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let filter = build_filter(default_level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("warn");
        init_tracing("debug");
    }
}
