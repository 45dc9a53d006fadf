//! Logging setup.
//!
//! Log output goes to stderr so it never mixes with the display text on
//! stdout. `RUST_LOG` takes precedence over the configured level:
//!
//! ```bash
//! RUST_LOG=calcpad=debug calcpad "1/0="
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize the global subscriber. Only the first call takes effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&config.level)
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}

pub fn init() {
    init_with_config(&LoggingConfig::default());
}
