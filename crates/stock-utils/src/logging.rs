//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber, falling back to `default_directive` when
/// `RUST_LOG` is not set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
