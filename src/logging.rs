//! Diagnostic logging to stderr.
//!
//! Quiet (`warn`) by default so stdout carries only the report. `RUST_LOG`
//! overrides the level:
//! ```bash
//! RUST_LOG=debug factorial-digit-sum
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // A subscriber set elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
