//! Logging setup
//!
//! Installs a tracing subscriber filtered by `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "kv_cache=info";

/// Installs the global tracing subscriber.
///
/// Defaults to [`DEFAULT_FILTER`], can be overridden with the `RUST_LOG` env var.
/// Returns false when a subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
