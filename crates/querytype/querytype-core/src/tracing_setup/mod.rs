//! Tracing initialization and span definitions.
//!
//! Logs always go to stderr; stdout carries only the response document.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with the given filter directives.
///
/// Falls back to the default level if `filter` does not parse.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
