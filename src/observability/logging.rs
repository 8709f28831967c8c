//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the supplied default directive.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
