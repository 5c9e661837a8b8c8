//! Tracing setup for the `pocket` binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter, overriding the settings
pub const LOG_ENV: &str = "POCKET_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr
///
/// `POCKET_LOG` wins over `default_directive`; an unparsable directive falls
/// back to `warn`.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::try_new(default_directive).unwrap_or_else(|_| EnvFilter::new("warn"))
        });

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
