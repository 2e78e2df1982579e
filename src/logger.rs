//! One-time `env_logger` setup for the report binary and tests.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time initialization
static INIT: Once = Once::new();

/// Installs an `env_logger` logger at `Info` level, unless one is already installed.
///
/// `RUST_LOG` overrides the defaults, e.g. `RUST_LOG=chaintable=debug` shows every resize.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_logging_levels() {
        initialize_logger();
        initialize_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
