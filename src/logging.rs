//! Logger bootstrap for test runs.

use env_logger::{Builder, Env};

/// Install the process-wide logger.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call from every test; only
/// the first call installs a logger.
pub fn init_logging(default_filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .is_test(true)
        .try_init();
}
