//! `env_logger` setup for the binary and for tests.
//!
//! Verbosity comes from `RUST_LOG` when set, e.g.
//! `RUST_LOG=ciphertool=debug`. Request text and keys are never logged.

use env_logger::Env;
use log::debug;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise logging once. `verbose` lowers the default filter to `debug`.
pub fn init(verbose: bool) {
    INIT_LOGGER.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
            .format_timestamp_micros()
            .init();

        debug!("logging initialised at default level {}", default_level);
    });
}

/// Logger for test binaries; safe to call from many tests
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
